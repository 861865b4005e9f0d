//! Interactive TUI menus.

mod input;
mod options;
mod text;

use std::process::ExitCode;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::settings::Settings;

/// Run TUI interactive mode.
pub fn run(settings: &Settings) -> ExitCode {
    gen_main_menu(settings)
}
