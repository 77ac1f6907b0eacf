//! Main entry point for credentry.

use clap::Parser;
use credentry::cli::Cli;
use credentry::utils::error_exit;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        error_exit(&e.to_string(), 1);
    }
}
