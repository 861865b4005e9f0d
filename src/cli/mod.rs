//! One-shot command-line generation.

mod args;
pub mod prompts;

use std::io::Write;
use std::process::ExitCode;

use rand::Rng;
use zeroize::Zeroizing;

pub use args::Args;
use prompts::Prompts;

use crate::catalog::CatalogSource;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::notify::{Notifier, Severity};
use crate::pass::{self, GenerationError, charset};
use crate::session::Session;
use crate::settings::Settings;
use crate::terminal::stdout_is_tty;

/// Generate the requested passwords and print or copy them.
///
/// Failures are reported through the notifier; the exit status stays 0.
pub fn run(settings: Settings) -> ExitCode {
    let mut notifier = Prompts::new(settings.quiet);

    let source = settings.catalog_source();

    let mut clipboard = None;
    if settings.to_clipboard {
        match SystemClipboard::connect() {
            Ok(c) => clipboard = Some(c),
            Err(e) => {
                if !notifier.clipboard_fallback(&e.to_string()) {
                    return ExitCode::SUCCESS;
                }
            }
        }
    }

    let mut rng = pass::csprng();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let generated = generate_output(
        &settings,
        source.as_ref(),
        &mut rng,
        &mut out,
        clipboard.as_mut().map(|c| c as &mut dyn Clipboard),
        &mut notifier,
    );

    if generated.is_ok() && !notifier.quiet() && stdout_is_tty() {
        if let Some(line) = entropy_line(&settings, source.as_ref()) {
            eprintln!("{line}");
        }
    }

    ExitCode::SUCCESS
}

/// Generate `settings.number_of_passwords` passwords.
///
/// Each password goes to `out` on its own line, or, with a clipboard, the
/// whole batch is copied newline-separated (no trailing newline for a
/// single password). The first failure stops the batch.
fn generate_output<R, W, N>(
    settings: &Settings,
    source: &dyn CatalogSource,
    rng: &mut R,
    out: &mut W,
    clipboard: Option<&mut dyn Clipboard>,
    notifier: &mut N,
) -> Result<(), GenerationError>
where
    R: Rng,
    W: Write + ?Sized,
    N: Notifier + ?Sized,
{
    let mut session = Session::configured(settings.selection.clone(), settings.pass_length);
    let mut batch = Zeroizing::new(String::new());

    for _ in 0..settings.number_of_passwords {
        if let Err(e) = session.generate(source, rng, notifier) {
            // input errors already went out as warnings
            if !e.is_input_error() {
                notifier.notify(session.error(), Severity::Error);
            }
            return Err(e);
        }

        if clipboard.is_some() {
            batch.push_str(session.output());
            batch.push('\n');
        } else {
            let _ = out.write_all(session.output().as_bytes());
            let _ = out.write_all(b"\n");
        }
    }

    if let Some(clipboard) = clipboard {
        if settings.number_of_passwords == 1 {
            batch.pop();
        }
        match clipboard.copy(&batch) {
            Ok(()) => notifier.notify("*** -COPIED TO CLIPBOARD- ***", Severity::Success),
            Err(e) => notifier.notify(&format!("Clipboard error: {e}"), Severity::Error),
        }
    }

    Ok(())
}

fn entropy_line(settings: &Settings, source: &dyn CatalogSource) -> Option<String> {
    let catalog = source.load().ok()?;
    let pool = charset::build(&settings.selection, &catalog);
    if pool.is_empty() {
        return None;
    }
    let bits = pass::entropy_bits(settings.pass_length, &pool);
    Some(format!(
        "Entropy: {:.1} bits ({}) • Charset: {} chars",
        bits,
        pass::strength(bits),
        charset::weights(&pool).len()
    ))
}
