//! Menu and help screens.

use crate::catalog::ClassId;
use crate::notify::{Notice, Severity};
use crate::session::Session;
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    BOLD, CYAN, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center,
    box_line_styled, box_opt, box_rule, box_top, checkbox, flush, mask,
};

/// Entropy summary for the current options, if the catalog could be read.
pub struct Strength {
    pub bits: f64,
    pub label: &'static str,
    pub charset: usize,
}

pub fn print_main_menu(
    session: &Session,
    strength: Option<&Strength>,
    reveal: bool,
    notices: &[Notice],
) {
    box_top("Password Generator");
    box_line_center("Esc/q: quit | h: help");
    box_line("");

    box_line(&format!("{BOLD}Password options{RESET}"));
    for (i, class) in ClassId::ALL.into_iter().enumerate() {
        box_line(&format!(
            "  {}) {} {}",
            i + 1,
            checkbox(session.is_enabled(class)),
            class.label()
        ));
    }
    box_line("");
    box_line(&format!(
        "  5) Length: {}  {DIM}({MIN_LENGTH}-{MAX_LENGTH}){RESET}",
        session.length()
    ));
    box_line(&length_slider(session.length()));

    if !session.error().is_empty() {
        box_line("");
        box_line_styled(RED, session.error());
    }

    box_rule();
    box_line(&format!("{BOLD}Generated password{RESET}"));
    let output = session.output();
    if output.is_empty() {
        box_line(&format!("{DIM}(none){RESET}"));
    } else if reveal {
        box_line(output);
    } else {
        box_line(&mask(output));
    }
    if let Some(s) = strength {
        box_line(&format!(
            "{DIM}{:.1} bits ({}) • Charset: {} chars{RESET}",
            s.bits, s.label, s.charset
        ));
    }

    box_rule();
    box_line_center("g/Enter) Generate | c) Copy | r) Reset | v) Show/Hide");
    box_bottom();

    if notices.is_empty() {
        println!();
    } else {
        for notice in notices {
            println!("{}{notice}{RESET}", color(notice.severity));
        }
    }
    flush();
}

fn color(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => CYAN,
        Severity::Success => GREEN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
    }
}

/// Render the length as a position on a fixed-width track.
pub fn length_slider(length: usize) -> String {
    const TRACK: usize = 50;
    let length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    let pos = (length - MIN_LENGTH) * (TRACK - 1) / (MAX_LENGTH - MIN_LENGTH);
    let mut track = String::with_capacity(TRACK * 3);
    for i in 0..TRACK {
        track.push(if i == pos { '●' } else { '─' });
    }
    format!("     {MIN_LENGTH} {track} {MAX_LENGTH}")
}

pub fn print_help() {
    box_top("classpass");
    box_line_center("Character-class password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments (or with -i) to open this");
    box_line("     menu.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to print");
    box_line("     passwords without the menu.");
    box_line("");
    box_line("KEYS:");
    box_opt("  1-4", "Toggle lowercase, uppercase, digits, symbols");
    box_opt("  5", "Edit password length (12-100)");
    box_opt("  g, Enter", "Generate a password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  r", "Reset every option to its default");
    box_opt("  v", "Show or hide the password");
    box_opt("  h", "Show this help");
    box_opt("  q, Esc", "Quit");
    box_line("");
    box_line("DATA:");
    box_line("  Characters come from a JSON table (default ./data.json, or -d");
    box_line("  PATH). It is re-read on every generation.");
    box_line("");
    box_bottom();
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_ends() {
        assert!(length_slider(MIN_LENGTH).contains(&format!("{MIN_LENGTH} ●")));
        assert!(length_slider(MAX_LENGTH).contains(&format!("● {MAX_LENGTH}")));
        assert_eq!(length_slider(16).matches('●').count(), 1);
    }
}
