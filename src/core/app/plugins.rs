//! Plugin group definitions for the showcoords application

use bevy::app::{PluginGroup, PluginGroupBuilder};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        // Debug builds: show poller transitions and monitor hotplug
        LogPlugin {
            level: Level::INFO,
            filter: "showcoords=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        // Release builds: Quieter logging, focus on warnings and errors
        LogPlugin {
            level: Level::WARN,
            filter: "showcoords=warn,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Configure default Bevy plugins with the overlay as primary window
pub fn configure_default_plugins(window: Window) -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        })
        .set(configure_logging())
}

/// Plugin group for the overlay itself
#[derive(Default)]
pub struct OverlayPluginGroup;

impl PluginGroup for OverlayPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::poller::PollerPlugin;
        use crate::ui::overlay::OverlayPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(OverlayPlugin) // Spawns the label the poller writes into
            .add(PollerPlugin)
    }
}
