//! Application logging functionality
//!
//! Handles log file management and output redirection

use crate::core::config::ConfigFile;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the path to the logs directory
pub fn logs_dir() -> PathBuf {
    logs_dir_in(&ConfigFile::config_dir())
}

pub fn logs_dir_in(config_dir: &Path) -> PathBuf {
    config_dir.join("logs")
}

/// Log file name for a given day, one file per day
pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("showcoords-{}.log", date.format("%Y-%m-%d"))
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    logs_dir().join(log_file_name(chrono::Utc::now().date_naive()))
}

/// Initialize the logs directory
pub fn initialize_logs_directory() -> Result<()> {
    fs::create_dir_all(logs_dir())?;
    Ok(())
}

/// Set up log redirection to ~/.config/showcoords/logs/
///
/// Bevy's log output goes to stdout/stderr, so both descriptors are pointed
/// at the day's log file.
#[cfg(unix)]
pub fn setup_log_redirection() -> Result<()> {
    use std::fs::OpenOptions;
    use std::os::unix::io::AsRawFd;

    // Check if config directory exists - if not, we'll fail gracefully
    let config_dir = ConfigFile::config_dir();
    if !config_dir.exists() {
        return Err(anyhow!(
            "Config directory {:?} doesn't exist, run with --new-config first",
            config_dir
        ));
    }

    initialize_logs_directory()?;

    let log_file_path = current_log_file();

    // Create/open the log file - use truncate instead of append for single log file
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_file_path)?;

    // SAFETY: both descriptors are valid for the duration of the calls and
    // dup2 leaves the original file descriptor owned by `log_file`.
    unsafe {
        libc::dup2(log_file.as_raw_fd(), libc::STDOUT_FILENO);
        libc::dup2(log_file.as_raw_fd(), libc::STDERR_FILENO);
    }

    // Print initial log message to confirm redirection
    println!(
        "=== showcoords started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Logs redirected to: {:?}", log_file_path);

    Ok(())
}

#[cfg(not(unix))]
pub fn setup_log_redirection() -> Result<()> {
    Err(anyhow!("Log redirection is only supported on Unix platforms"))
}
