//! TTY detection and raw mode guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// True when stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// True when stdout is attached to a terminal.
pub fn stdout_is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) == 1 }
}

/// Raw mode for the lifetime of the guard.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { active: true })
    }

    /// Leave raw mode early (also happens on drop).
    pub fn leave(&mut self) {
        if self.active {
            let _ = disable_raw_mode();
            self.active = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.leave();
    }
}
