use std::env;
use std::process::ExitCode;

use clap::Parser;

mod catalog;
mod cli;
mod clipboard;
mod exits;
mod logging;
mod notify;
mod pass;
mod session;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();
    logging::init();

    let bare = env::args_os().len() == 1;
    let settings = cli::Args::parse().into_settings();

    if (bare || settings.interactive) && terminal::stdin_is_tty() {
        tui::run(&settings)
    } else {
        cli::run(settings)
    }
}
