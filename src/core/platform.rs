//! Platform-specific functionality and error handling.
//!
//! This module provides the process-level glue around the Bevy app:
//! CLI parsing and fatal error reporting.

/// Handle a fatal startup error.
///
/// Prints the error chain to stderr and exits with code 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error starting showcoords:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse the command line arguments.
pub fn get_cli_args() -> crate::core::config::CliArgs {
    use clap::Parser;
    crate::core::config::CliArgs::parse()
}
