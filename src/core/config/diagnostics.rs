//! Settings problems found while the app is being assembled
//!
//! Settings are resolved in `create_app`, before `LogPlugin` has installed a
//! subscriber, so anything logged there would be dropped. Problems are
//! collected here instead and logged by a `Startup` system.

use super::settings::OverlaySettings;
use super::user_config::ConfigFile;
use bevy::prelude::*;
use std::path::{Path, PathBuf};

/// Settings-file outcome waiting to be logged
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigDiagnostics {
    loaded_from: Option<PathBuf>,
    warnings: Vec<String>,
    reported: usize,
}

impl ConfigDiagnostics {
    /// Loads the settings file at `path`.
    ///
    /// A missing file is silent. An unreadable or malformed one is recorded
    /// as a warning and treated as absent.
    pub fn load_config(&mut self, path: &Path) -> Option<ConfigFile> {
        match ConfigFile::load_from(path) {
            Ok(Some(config)) => {
                self.loaded_from = Some(path.to_path_buf());
                Some(config)
            }
            Ok(None) => None,
            Err(e) => {
                self.warn(format!("{e:#}, using defaults"));
                None
            }
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Warnings not yet logged
    pub fn pending(&self) -> &[String] {
        &self.warnings
    }

    /// Number of warnings already logged
    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}

/// Logs the collected settings diagnostics once the logger exists
pub fn report_config_diagnostics(
    mut diagnostics: ResMut<ConfigDiagnostics>,
    settings: Option<Res<OverlaySettings>>,
) {
    if let Some(path) = diagnostics.loaded_from() {
        debug!("Loaded user settings from {:?}", path);
    }

    let warnings = std::mem::take(&mut diagnostics.warnings);
    for warning in &warnings {
        warn!("{}", warning);
    }
    diagnostics.reported += warnings.len();

    if let Some(settings) = settings {
        debug!("Resolved overlay settings: {:?}", *settings);
    }
}

pub struct ConfigReportPlugin {
    pub diagnostics: ConfigDiagnostics,
}

impl Plugin for ConfigReportPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.diagnostics.clone())
            .add_systems(Startup, report_config_diagnostics);
    }
}
