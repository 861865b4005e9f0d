//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use crate::notify::{Notifier, Severity};
use crate::terminal::{RED, RESET, YELLOW, stdin_is_tty};

/// Print a warning message to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{YELLOW}{msg}{RESET}");
}

/// Notices for one-shot runs. Info and success lines are dropped in quiet
/// mode; warnings and errors always reach stderr.
pub struct Prompts {
    quiet: bool,
}

impl Prompts {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Skip prompts when quiet or when nobody is at the keyboard.
    pub fn skip_prompt(&self) -> bool {
        self.quiet || !stdin_is_tty()
    }

    /// Ask whether to print instead of copying. Returns true to fall back
    /// to the terminal, false to abort.
    pub fn clipboard_fallback(&self, reason: &str) -> bool {
        if self.skip_prompt() {
            return true;
        }

        warn(&format!("Clipboard unavailable ({reason})."));
        eprint!("Print to terminal instead? [Y/n]: ");
        let _ = std::io::stderr().flush();

        let mut input = String::new();
        if std::io::stdin().read_line(&mut input).is_err() {
            return true;
        }
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }

        eprintln!("\nAborted.");
        false
    }
}

impl Prompts {
    /// Line written to stderr for a notice, `None` when it is suppressed.
    fn render(&self, message: &str, severity: Severity) -> Option<String> {
        match severity {
            Severity::Info | Severity::Success if self.quiet => None,
            Severity::Info | Severity::Success => Some(message.to_string()),
            Severity::Warning => Some(format!("{YELLOW}{message}{RESET}")),
            Severity::Error => Some(format!("{RED}{message}{RESET}")),
        }
    }
}

impl Notifier for Prompts {
    fn notify(&mut self, message: &str, severity: Severity) {
        if let Some(line) = self.render(message, severity) {
            eprintln!("{line}");
        }
    }
}
