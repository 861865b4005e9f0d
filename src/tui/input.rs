//! Keyboard input for the interactive menu.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::catalog::ClassId;
use crate::terminal::{RawModeGuard, flush};

/// What a key press on the main menu asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Toggle(ClassId),
    EditLength,
    Generate,
    Copy,
    Reset,
    Reveal,
    Help,
    Quit,
}

/// Map a key press to a menu action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Char('1') => Action::Toggle(ClassId::Lower),
        KeyCode::Char('2') => Action::Toggle(ClassId::Upper),
        KeyCode::Char('3') => Action::Toggle(ClassId::Digit),
        KeyCode::Char('4') => Action::Toggle(ClassId::Symbol),
        KeyCode::Char('5') | KeyCode::Char('l') => Action::EditLength,
        KeyCode::Char('g') | KeyCode::Enter => Action::Generate,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('v') => Action::Reveal,
        KeyCode::Char('h') | KeyCode::Char('?') => Action::Help,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Block until a key maps to an action. Read errors are treated as quit.
pub fn read_action() -> Action {
    let _guard = match RawModeGuard::enter() {
        Ok(g) => g,
        Err(_) => return Action::Quit,
    };

    loop {
        match read() {
            Ok(Event::Key(key)) => {
                if let Some(action) = action_for(key) {
                    return action;
                }
            }
            Ok(_) => {}
            Err(_) => return Action::Quit,
        }
    }
}

/// Get numeric input with cursor movement. `None` when cancelled.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut digits = initial_value.to_string();
    let mut cursor_pos = digits.len() + 1; // 1-based: 1 = before first digit
    let mut cancelled = false;

    let mut guard = match RawModeGuard::enter() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: {}", prompt, digits);
    flush();
    let mut last_len = digits.len();

    loop {
        let key_event = match read() {
            Ok(Event::Key(k)) if k.kind != KeyEventKind::Release => k,
            Ok(_) => continue,
            Err(_) => {
                cancelled = true;
                break;
            }
        };

        match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key_event.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                digits.clear();
                cursor_pos = 1;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor_pos > 1 {
                    cursor_pos -= 1;
                    digits.remove(cursor_pos - 1);
                }
            }
            KeyCode::Delete => {
                if cursor_pos <= digits.len() {
                    digits.remove(cursor_pos - 1);
                }
            }
            KeyCode::Left => cursor_pos = cursor_pos.saturating_sub(1).max(1),
            KeyCode::Right => cursor_pos = (cursor_pos + 1).min(digits.len() + 1),
            KeyCode::Home => cursor_pos = 1,
            KeyCode::End => cursor_pos = digits.len() + 1,
            KeyCode::Char(c) if c.is_ascii_digit() && digits.len() < 6 => {
                digits.insert(cursor_pos - 1, c);
                cursor_pos += 1;
            }
            _ => {}
        }

        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, digits);
        print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
        flush();
        last_len = digits.len();
    }

    guard.leave();
    println!();

    if cancelled || digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_toggle_classes() {
        assert_eq!(
            action_for(key(KeyCode::Char('1'))),
            Some(Action::Toggle(ClassId::Lower))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('4'))),
            Some(Action::Toggle(ClassId::Symbol))
        );
    }

    #[test]
    fn action_keys() {
        assert_eq!(action_for(key(KeyCode::Enter)), Some(Action::Generate));
        assert_eq!(action_for(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action_for(key(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(action_for(key(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(action_for(key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn ctrl_c_quits_instead_of_copying() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ev), Some(Action::Quit));
    }
}
