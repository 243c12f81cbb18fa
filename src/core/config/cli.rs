//! Command line interface for showcoords
//!
//! Every flag is optional: running with no arguments gives the standard
//! 16 ms / 1000 ms overlay. Values given here override the settings file.

use super::diagnostics::ConfigDiagnostics;
use super::settings::OverlaySettings;
use super::user_config::ConfigFile;
use bevy::prelude::*;
use clap::Parser;

/// showcoords CLI arguments
///
/// Examples:
///   showcoords                       # Default overlay
///   showcoords --fast-ms 8           # Poll faster while the mouse moves
///   showcoords --slow-ms 2000        # Back off further while idle
///   showcoords --log-to-file         # Write logs to ~/.config/showcoords/logs
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "showcoords",
    version,
    about = "Always-on-top overlay showing the mouse cursor coordinates",
    long_about = "showcoords opens a small frameless window that follows the cursor across monitors and shows its global and per-monitor coordinates. It polls quickly while the mouse moves and backs off while it is idle."
)]
pub struct CliArgs {
    /// Polling period while the cursor is moving
    #[clap(
        long = "fast-ms",
        value_name = "MS",
        help = "Polling period while the cursor moves (default 16)"
    )]
    pub fast_ms: Option<u64>,

    /// Polling period once the cursor has been idle
    #[clap(
        long = "slow-ms",
        value_name = "MS",
        help = "Polling period while the cursor is idle (default 1000)",
        long_help = "Polling period used once the cursor has been still for about one slow period's worth of fast ticks. Must not be shorter than --fast-ms."
    )]
    pub slow_ms: Option<u64>,

    /// Label font size
    #[clap(long = "font-size", value_name = "PX", help = "Label font size (default 16)")]
    pub font_size: Option<f32>,

    /// Redirect stdout and stderr to a dated log file
    #[clap(
        long = "log-to-file",
        help = "Write logs to ~/.config/showcoords/logs instead of the terminal",
        long_help = "Redirect stdout and stderr into ~/.config/showcoords/logs/showcoords-YYYY-MM-DD.log. The config directory must exist; create it with --new-config."
    )]
    pub log_to_file: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Create ~/.config/showcoords with a settings.json holding the default values, then exit."
    )]
    pub new_config: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// Only values given on the command line are checked here; the merged
    /// result is checked again by [`CliArgs::resolve_settings`].
    pub fn validate(&self) -> Result<(), String> {
        match (self.fast_ms, self.slow_ms) {
            (Some(fast_ms), Some(slow_ms)) => validate_timing(fast_ms, slow_ms)?,
            (Some(fast_ms), None) => validate_timing(fast_ms, fast_ms)?,
            (None, Some(0)) => return Err("The slow polling period must be at least 1 ms".to_string()),
            _ => {}
        }
        if let Some(font_size) = self.font_size {
            validate_font_size(font_size)?;
        }
        Ok(())
    }

    /// Merge CLI flags, the settings file and built-in defaults
    ///
    /// Priority order:
    /// 1. CLI argument
    /// 2. Config file setting (~/.config/showcoords/settings.json)
    /// 3. Built-in default
    ///
    /// Unusable file values fall back to the default and are recorded in
    /// `diagnostics`.
    pub fn resolve_settings(
        &self,
        config: Option<&ConfigFile>,
        diagnostics: &mut ConfigDiagnostics,
    ) -> Result<OverlaySettings, String> {
        let defaults = OverlaySettings::default();
        let fast_ms = self
            .fast_ms
            .or_else(|| config.and_then(|c| c.fast_ms))
            .unwrap_or(defaults.fast_ms);
        let slow_ms = self
            .slow_ms
            .or_else(|| config.and_then(|c| c.slow_ms))
            .unwrap_or(defaults.slow_ms);
        let font_size = self
            .font_size
            .or_else(|| config.and_then(|c| c.font_size))
            .unwrap_or(defaults.font_size);
        let text_color = match config.map(ConfigFile::parsed_text_color) {
            Some(Ok(Some(color))) => color,
            Some(Err(message)) => {
                diagnostics.warn(message);
                defaults.text_color
            }
            _ => defaults.text_color,
        };

        validate_timing(fast_ms, slow_ms)?;
        validate_font_size(font_size)?;

        Ok(OverlaySettings {
            fast_ms,
            slow_ms,
            font_size,
            text_color,
            ..defaults
        })
    }
}

fn validate_timing(fast_ms: u64, slow_ms: u64) -> Result<(), String> {
    if fast_ms == 0 {
        return Err("The fast polling period must be at least 1 ms".to_string());
    }
    if slow_ms < fast_ms {
        return Err(format!(
            "The slow polling period ({slow_ms} ms) must not be shorter than the fast one ({fast_ms} ms)"
        ));
    }
    Ok(())
}

fn validate_font_size(font_size: f32) -> Result<(), String> {
    if !(font_size.is_finite() && font_size > 0.0) {
        return Err(format!("Font size must be a positive number, got {font_size}"));
    }
    Ok(())
}
