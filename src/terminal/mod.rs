//! Shared terminal utilities.
//!
//! Box drawing, masking, raw mode management, and ANSI helpers.

mod output;
mod tty;

pub use output::*;
pub use tty::*;
