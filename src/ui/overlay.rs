//! Overlay window and coordinate label
//!
//! The overlay is the primary window itself: borderless, always on top and
//! transparent, with a single text node the poller writes into.

use crate::core::config::settings::LABEL_PADDING;
use crate::core::config::{OverlaySettings, WINDOW_TITLE};
use bevy::prelude::*;
#[cfg(any(target_os = "macos", target_os = "linux"))]
use bevy::window::CompositeAlphaMode;
use bevy::window::{WindowLevel, WindowPosition, WindowResolution};

/// Marker for the text node showing the coordinates
#[derive(Component, Default)]
pub struct OverlayLabel;

/// Builds the primary window description for the overlay
pub fn overlay_window(settings: &OverlaySettings) -> Window {
    Window {
        title: WINDOW_TITLE.to_string(),
        resolution: WindowResolution::new(settings.window_size.x, settings.window_size.y),
        position: WindowPosition::At(IVec2::ZERO),
        decorations: false,
        resizable: false,
        transparent: true,
        window_level: WindowLevel::AlwaysOnTop,
        skip_taskbar: true,
        // Transparent surfaces need a non-opaque alpha mode on these platforms
        #[cfg(target_os = "macos")]
        composite_alpha_mode: CompositeAlphaMode::PostMultiplied,
        #[cfg(target_os = "linux")]
        composite_alpha_mode: CompositeAlphaMode::PreMultiplied,
        ..default()
    }
}

/// Spawns the UI camera and the coordinate label
pub fn spawn_overlay(mut commands: Commands, settings: Res<OverlaySettings>) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(LABEL_PADDING)),
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.font_size,
                    ..default()
                },
                TextColor(settings.text_color),
                OverlayLabel,
            ));
        });

    debug!("Overlay label spawned");
}

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::NONE))
            .add_systems(Startup, spawn_overlay);
    }
}
