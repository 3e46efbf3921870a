use std::process::ExitCode;

use clap::Parser;

mod cli;
mod controller;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod theme;
mod tui;

use cli::{CliFlags, prompts};

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();

    let flags = CliFlags::parse();

    let _log_guard = match logging::init(flags.log_file.as_deref(), &flags.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            prompts::warn(&format!("Logging disabled: {e:#}"));
            None
        }
    };

    let result = if flags.print || !cli::tty::is_interactive() {
        cli::print(&flags)
    } else {
        tui::run().map(|()| ExitCode::SUCCESS)
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "exiting with error");
            prompts::error(&format!("Error: {e:#}"));
            ExitCode::FAILURE
        }
    }
}
