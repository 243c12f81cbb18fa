//! Bevy systems driving the coordinate poller
//!
//! Two hooks share one operation:
//! - [`on_poll_timer`] fires on the repeating poll timer
//! - [`on_pointer_motion`] fires when mouse motion events arrive
//!
//! Both go through [`PollerContext::sample_and_update`], which reads the
//! cursor, runs the [`PollState`] step and applies its outcome to the label,
//! the window and the loop's wake interval.

use super::state::{PollInterval, PollState, TickOutcome};
use crate::host::monitors::{track_monitors, MonitorLayout};
use crate::host::CursorSource;
use crate::ui::overlay::OverlayLabel;
use bevy::ecs::system::SystemParam;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow, WindowPosition};
use bevy::winit::{UpdateMode, WinitSettings};
use std::time::Duration;

/// Repeating timer whose period follows the current [`PollInterval`]
#[derive(Resource, Debug, Clone)]
pub struct PollTimer(pub Timer);

impl PollTimer {
    pub fn new(period: Duration) -> Self {
        Self(Timer::new(period, TimerMode::Repeating))
    }
}

/// Event loop wake-up mode for a polling period.
///
/// Reactive mode also wakes on device events, so raw mouse motion is
/// noticed between timer ticks.
pub fn update_mode_for(period: Duration) -> UpdateMode {
    UpdateMode::reactive(period)
}

/// Everything a poll step reads or mutates
#[derive(SystemParam)]
pub struct PollerContext<'w, 's> {
    state: ResMut<'w, PollState>,
    timer: ResMut<'w, PollTimer>,
    winit: Option<ResMut<'w, WinitSettings>>,
    cursor: NonSend<'w, CursorSource>,
    layout: Res<'w, MonitorLayout>,
    labels: Query<'w, 's, &'static mut Text, With<OverlayLabel>>,
    windows: Query<'w, 's, &'static mut Window, With<PrimaryWindow>>,
}

impl PollerContext<'_, '_> {
    /// Reads the cursor, advances the poll state and applies the outcome
    pub fn sample_and_update(&mut self) {
        let global = self.cursor.global_position();
        let outcome = self.state.sample_and_update(global, self.layout.surfaces());
        if outcome.is_noop() {
            return;
        }
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: TickOutcome) {
        if let Some(label) = outcome.label {
            for mut text in &mut self.labels {
                text.0.clone_from(&label);
            }
        }

        if let Some(origin) = outcome.move_to {
            for mut window in &mut self.windows {
                window.position = WindowPosition::At(origin.as_ivec2());
            }
        }

        if let Some(interval) = outcome.interval_change {
            let period = self.state.timing().period(interval);
            match interval {
                PollInterval::Fast => debug!("Cursor moving, polling every {:?}", period),
                PollInterval::Slow => debug!("Cursor idle, backing off to {:?}", period),
            }
            self.timer.0.set_duration(period);
            self.timer.0.reset();
            if let Some(winit) = self.winit.as_mut() {
                winit.focused_mode = update_mode_for(period);
                winit.unfocused_mode = update_mode_for(period);
            }
        }
    }
}

/// Timer hook: samples whenever the poll timer completes a period
pub fn on_poll_timer(time: Res<Time<Real>>, mut poller: PollerContext) {
    if poller.timer.0.tick(time.delta()).just_finished() {
        poller.sample_and_update();
    }
}

/// Move hook: samples as soon as any mouse motion is reported
pub fn on_pointer_motion(
    mut cursor_moved: EventReader<CursorMoved>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut poller: PollerContext,
) {
    // Drain both readers so stale events never trigger a later sample
    let moved = cursor_moved.read().count() + mouse_motion.read().count() > 0;
    if moved {
        poller.sample_and_update();
    }
}

/// Registers the poller resources and both hooks
pub struct PollerPlugin;

impl Plugin for PollerPlugin {
    fn build(&self, app: &mut App) {
        let timing = app
            .world()
            .get_resource::<crate::core::config::OverlaySettings>()
            .map(|settings| settings.timing())
            .unwrap_or_default();

        app.insert_resource(PollState::new(timing))
            .insert_resource(PollTimer::new(timing.fast))
            .init_resource::<MonitorLayout>()
            .add_event::<CursorMoved>()
            .add_event::<MouseMotion>()
            .add_systems(
                Update,
                (on_pointer_motion, on_poll_timer)
                    .chain()
                    .in_set(PollerSet),
            )
            .add_systems(Update, track_monitors.before(PollerSet));
    }
}

/// System set containing both poll hooks
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PollerSet;
