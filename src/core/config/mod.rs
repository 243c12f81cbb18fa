//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - CLI arguments parsing
//! - User configuration files
//! - Settings problems reported once logging is up
//! - Built-in defaults and the resolved settings

pub mod cli;
pub mod diagnostics;
pub mod settings;
pub mod user_config;

// Simple, clear re-exports
pub use cli::CliArgs;
pub use diagnostics::{ConfigDiagnostics, ConfigReportPlugin};
pub use settings::{OverlaySettings, DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
pub use user_config::ConfigFile;
