//! Terminal output utilities.
//!
//! Box drawing, masking, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

/// Replace every character with a bullet.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

/// Render a checkbox.
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);
    if display_len <= INNER_WIDTH {
        println!("│ {}{} │", content, " ".repeat(INNER_WIDTH - display_len));
    } else {
        for chunk in wrap(content, INNER_WIDTH) {
            box_line(&chunk);
        }
    }
}

/// Print content in one style, wrapped first so every line is styled
/// and reset on its own.
pub fn box_line_styled(style: &str, content: &str) {
    for chunk in wrap(content, INNER_WIDTH) {
        box_line(&format!("{style}{chunk}{RESET}"));
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let display_len = console_width(content);
    if display_len <= INNER_WIDTH {
        let total_padding = INNER_WIDTH - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        box_line(content);
    }
}

/// Print a horizontal rule inside a box.
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a key/option with its description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = INNER_WIDTH - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap(desc, desc_col);
    let first = lines.first().map(String::as_str).unwrap_or("");
    println!(
        "│ {}{}{} │",
        flag_padded,
        first,
        " ".repeat(desc_col.saturating_sub(first.chars().count()))
    );

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.chars().count());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

/// Greedy word wrap. Words longer than `width` are split without cutting
/// through escape sequences.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while console_width(&word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let (head, tail) = split_at_width(&word, width);
            lines.push(head);
            word = tail;
        }
        if current.is_empty() {
            current = word;
        } else if console_width(&current) + 1 + console_width(&word) <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split after `width` visible characters. A style active at the split is
/// reset at the end of the head and reopened at the start of the tail.
fn split_at_width(s: &str, width: usize) -> (String, String) {
    let mut head = String::new();
    let mut escape = String::new();
    let mut active = String::new();
    let mut visible = 0;

    for (i, c) in s.char_indices() {
        if c == '\x1b' || !escape.is_empty() {
            escape.push(c);
            if c == 'm' {
                head.push_str(&escape);
                if escape == RESET {
                    active.clear();
                } else {
                    active.push_str(&escape);
                }
                escape.clear();
            }
            continue;
        }
        if visible == width {
            if !active.is_empty() {
                head.push_str(RESET);
            }
            return (head, format!("{active}{}", &s[i..]));
        }
        head.push(c);
        visible += 1;
    }
    head.push_str(&escape);
    (head, String::new())
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("•••"), 3);
    }

    #[test]
    fn mask_hides_every_char() {
        assert_eq!(mask("a1!é"), "••••");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);

        let long = "x".repeat(25);
        let lines = wrap(&long, 10);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn wrap_keeps_escapes_whole() {
        let text = format!("{RED}{}{RESET}", "x".repeat(25));
        let lines = wrap(&text, 10);
        assert_eq!(
            lines,
            vec![
                format!("{RED}{}{RESET}", "x".repeat(10)),
                format!("{RED}{}{RESET}", "x".repeat(10)),
                format!("{RED}{}{RESET}", "x".repeat(5)),
            ]
        );
    }

    #[test]
    fn split_counts_only_visible_chars() {
        let (head, tail) = split_at_width(&format!("ab{BOLD}cd{RESET}ef"), 3);
        assert_eq!(head, format!("ab{BOLD}c{RESET}"));
        assert_eq!(tail, format!("{BOLD}d{RESET}ef"));
        assert_eq!(console_width(&head), 3);

        let (head, tail) = split_at_width("abc", 5);
        assert_eq!(head, "abc");
        assert_eq!(tail, "");
    }
}
