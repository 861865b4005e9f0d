use std::process::ExitCode;

use crate::catalog::{CatalogSource, ClassId};
use crate::clipboard::SystemClipboard;
use crate::notify::{Notifier, Notices, Severity};
use crate::pass::{self, charset};
use crate::session::Session;
use crate::settings::{MAX_LENGTH, MIN_LENGTH, Settings};
use crate::terminal::{clear, reset_terminal};

use super::{Action, Strength, get_numeric_input, print_help, print_main_menu, read_action};

/// Session seeded from command-line options, length clamped to the menu range.
pub fn initial_session(settings: &Settings) -> Session {
    let mut session = Session::new();
    for class in ClassId::ALL {
        session.set_enabled(class, settings.selection.contains(&class));
    }
    session.set_length(settings.pass_length);
    session
}

/// Entropy of the current options, `None` if the catalog can't be read.
fn strength(session: &Session, source: &dyn CatalogSource) -> Option<Strength> {
    let catalog = source.load().ok()?;
    let pool = charset::build(session.selection(), &catalog);
    if pool.is_empty() {
        return None;
    }
    let bits = pass::entropy_bits(session.length(), &pool);
    Some(Strength {
        bits,
        label: pass::strength(bits),
        charset: charset::weights(&pool).len(),
    })
}

pub fn gen_main_menu(settings: &Settings) -> ExitCode {
    reset_terminal();
    clear();

    let source = settings.catalog_source();

    let mut session = initial_session(settings);
    let mut clipboard = SystemClipboard::new();
    let mut notices = Notices::new();
    let mut rng = pass::csprng();
    let mut reveal = false;
    let mut show_help = false;

    loop {
        clear();
        let summary = if session.output().is_empty() {
            None
        } else {
            strength(&session, source.as_ref())
        };
        print_main_menu(&session, summary.as_ref(), reveal, &notices.drain());
        if show_help {
            print_help();
            show_help = false;
        }

        match read_action() {
            Action::Toggle(class) => session.toggle(class),
            Action::EditLength => {
                if let Some(len) = get_numeric_input("Enter new password length", session.length())
                {
                    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
                        notices.notify(
                            &format!("Length must be between {MIN_LENGTH} and {MAX_LENGTH}."),
                            Severity::Warning,
                        );
                    }
                    session.set_length(len);
                }
            }
            Action::Generate => {
                let _ = session.generate(source.as_ref(), &mut rng, &mut notices);
            }
            Action::Copy => session.copy(&mut clipboard, &mut notices),
            Action::Reset => {
                session.reset(&mut notices);
                reveal = false;
            }
            Action::Reveal => reveal = !reveal,
            Action::Help => show_help = true,
            Action::Quit => break,
        }
    }

    reset_terminal();
    clear();
    ExitCode::SUCCESS
}
