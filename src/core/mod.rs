//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Application initialization and configuration
//! - Settings and CLI handling
//! - Interrupt handling and exit status

pub mod app;
pub mod config;
pub mod platform;
pub mod runner;
pub mod shutdown;

// Re-export commonly used items
pub use app::create_app;
pub use config::{CliArgs, OverlaySettings};
pub use runner::run_app;
