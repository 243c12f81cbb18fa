//! Built-in defaults and the resolved overlay settings

use crate::poller::PollTiming;
use bevy::prelude::*;

/// Polling period while the cursor is moving, in milliseconds
pub const FAST_MS: u64 = 16;

/// Polling period once the cursor has been idle for a while, in milliseconds
pub const SLOW_MS: u64 = 1000;

pub const WINDOW_TITLE: &str = "showcoords";

/// Logical size of the overlay window
pub const DEFAULT_WINDOW_SIZE: Vec2 = Vec2::new(200.0, 50.0);

pub const DEFAULT_FONT_SIZE: f32 = 16.0;

pub const DEFAULT_TEXT_COLOR: Color = Color::WHITE;

/// Padding between the window edge and the label
pub const LABEL_PADDING: f32 = 4.0;

/// Settings after merging CLI flags, the settings file and defaults
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub fast_ms: u64,
    pub slow_ms: u64,
    pub font_size: f32,
    pub text_color: Color,
    pub window_size: Vec2,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            fast_ms: FAST_MS,
            slow_ms: SLOW_MS,
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl OverlaySettings {
    pub fn timing(&self) -> PollTiming {
        PollTiming::from_millis(self.fast_ms, self.slow_ms)
    }
}
