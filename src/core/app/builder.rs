//! Application builder and initialization
//!
//! This module provides the main app creation function

use super::plugins::{configure_default_plugins, OverlayPluginGroup};
use crate::core::config::{
    CliArgs, ConfigDiagnostics, ConfigFile, ConfigReportPlugin, OverlaySettings,
};
use crate::core::shutdown::{self, exit_on_esc, ShutdownPlugin, ShutdownRequest};
use crate::host::{CursorProbe, CursorSource, DeviceQueryProbe};
use crate::poller::systems::update_mode_for;
use crate::ui::overlay::overlay_window;
use anyhow::{anyhow, Result};
use bevy::prelude::*;
use bevy::winit::WinitSettings;

/// Creates a fully configured Bevy overlay application.
///
/// Host failures here are fatal: no cursor source, no interrupt handler
/// or invalid settings all stop the program before a window opens.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow!("CLI validation failed: {}", e))?;

    // No subscriber exists yet; problems are logged at Startup
    let mut diagnostics = ConfigDiagnostics::default();
    let config = diagnostics.load_config(&ConfigFile::config_path());
    let settings = cli_args
        .resolve_settings(config.as_ref(), &mut diagnostics)
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    let cursor = DeviceQueryProbe::connect()?;
    // Installed before DefaultPlugins so the interrupt maps to exit status 1
    let interrupt = shutdown::install_interrupt_handler()?;

    Ok(build_app(cli_args, settings, diagnostics, cursor, interrupt))
}

/// Assembles the app from already resolved host pieces
pub fn build_app(
    cli_args: CliArgs,
    settings: OverlaySettings,
    diagnostics: ConfigDiagnostics,
    cursor: impl CursorProbe + 'static,
    shutdown: ShutdownRequest,
) -> App {
    let mut app = App::new();
    let window = overlay_window(&settings);
    configure_resources(&mut app, cli_args, settings, cursor);
    app.add_plugins(configure_default_plugins(window));
    add_plugin_groups(&mut app, diagnostics, shutdown);
    add_exit_systems(&mut app);
    app
}

/// Sets up application resources and configuration
fn configure_resources(
    app: &mut App,
    cli_args: CliArgs,
    settings: OverlaySettings,
    cursor: impl CursorProbe + 'static,
) {
    // The loop wakes at the polling period; the poller retunes this later
    let wake = update_mode_for(settings.timing().fast);

    app.insert_resource(cli_args)
        .insert_resource(settings)
        .insert_resource(WinitSettings {
            focused_mode: wake,
            unfocused_mode: wake,
        })
        .insert_non_send_resource(CursorSource::new(cursor));
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App, diagnostics: ConfigDiagnostics, shutdown: ShutdownRequest) {
    debug!("Adding plugin groups...");

    app.add_plugins((
        ConfigReportPlugin { diagnostics },
        OverlayPluginGroup,
        ShutdownPlugin { request: shutdown },
    ));

    debug!("All plugin groups added successfully");
}

/// Add exit systems
fn add_exit_systems(app: &mut App) {
    app.add_systems(Update, exit_on_esc);
}
