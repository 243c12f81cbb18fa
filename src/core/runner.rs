//! Application runner logic
//!
//! Handles the special CLI flags, then builds and runs the overlay

use crate::core::config::{CliArgs, ConfigFile};
use crate::logging;
use anyhow::Result;
use bevy::app::AppExit;

/// Create and run the application with the given CLI arguments.
///
/// Returns the exit status reported by the event loop: success when the
/// window is closed, status 1 after an interrupt.
pub fn run_app(cli_args: CliArgs) -> Result<AppExit> {
    // Handle --new-config flag specially
    if cli_args.new_config {
        ConfigFile::initialize_config_directory()?;
        return Ok(AppExit::Success);
    }

    if cli_args.log_to_file {
        if let Err(e) = logging::setup_log_redirection() {
            eprintln!("Failed to setup log redirection: {}", e);
        }
    }

    let mut app = crate::core::app::create_app(cli_args)?;
    Ok(app.run())
}
