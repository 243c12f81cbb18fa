//! Adaptive polling state machine
//!
//! Pure logic with no Bevy world access: feed it a cursor sample plus the
//! current monitor snapshot and it reports what the overlay should change.
//! The Bevy systems in [`super::systems`] apply the returned [`TickOutcome`].

use crate::geometry::{surface_at, GlobalPoint, LocalCoordinate, Surface, SurfaceId};
use bevy::prelude::*;
use std::time::Duration;

/// The two polling periods the poller alternates between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum PollInterval {
    #[default]
    Fast,
    Slow,
}

/// Polling periods and the derived idle threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTiming {
    pub fast: Duration,
    pub slow: Duration,
}

impl PollTiming {
    pub fn from_millis(fast_ms: u64, slow_ms: u64) -> Self {
        Self {
            fast: Duration::from_millis(fast_ms),
            slow: Duration::from_millis(slow_ms),
        }
    }

    /// Number of stationary ticks tolerated before backing off.
    ///
    /// Roughly one slow period's worth of fast ticks: 1000 / 16 = 62.
    pub fn idle_threshold(&self) -> u32 {
        let fast = self.fast.as_millis().max(1);
        let ratio = self.slow.as_millis() / fast;
        u32::try_from(ratio).unwrap_or(u32::MAX)
    }

    pub fn period(&self, interval: PollInterval) -> Duration {
        match interval {
            PollInterval::Fast => self.fast,
            PollInterval::Slow => self.slow,
        }
    }
}

impl Default for PollTiming {
    fn default() -> Self {
        use crate::core::config::settings::{FAST_MS, SLOW_MS};
        Self::from_millis(FAST_MS, SLOW_MS)
    }
}

/// Everything one sample observed about the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorSample<'a> {
    pub global: GlobalPoint,
    pub surface: Option<&'a Surface>,
}

impl<'a> CursorSample<'a> {
    /// Resolves the containing surface for a raw global position
    pub fn resolve(global: GlobalPoint, surfaces: &'a [Surface]) -> Self {
        Self {
            global,
            surface: surface_at(surfaces, global),
        }
    }

    pub fn surface_id(&self) -> Option<SurfaceId> {
        self.surface.map(|surface| surface.id)
    }

    pub fn local(&self) -> Option<LocalCoordinate> {
        self.surface.map(|surface| surface.to_local(self.global))
    }
}

/// Side effects requested by a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// New label text, only present when the coordinate changed
    pub label: Option<String>,
    /// Where to move the overlay window, only when the surface changed
    pub move_to: Option<GlobalPoint>,
    /// The interval to switch to, only on a transition
    pub interval_change: Option<PollInterval>,
}

impl TickOutcome {
    pub fn is_noop(&self) -> bool {
        self.label.is_none() && self.move_to.is_none() && self.interval_change.is_none()
    }
}

/// Poller state owned by the overlay for its whole lifetime
#[derive(Resource, Debug, Clone, Default)]
pub struct PollState {
    last_local: Option<LocalCoordinate>,
    last_surface: Option<SurfaceId>,
    idle_count: u32,
    interval: PollInterval,
    timing: PollTiming,
}

impl PollState {
    pub fn new(timing: PollTiming) -> Self {
        Self {
            timing,
            ..default()
        }
    }

    pub fn interval(&self) -> PollInterval {
        self.interval
    }

    pub fn idle_count(&self) -> u32 {
        self.idle_count
    }

    pub fn last_local(&self) -> Option<LocalCoordinate> {
        self.last_local
    }

    pub fn last_surface(&self) -> Option<SurfaceId> {
        self.last_surface
    }

    pub fn timing(&self) -> PollTiming {
        self.timing
    }

    pub fn current_period(&self) -> Duration {
        self.timing.period(self.interval)
    }

    /// Runs one poll step against a monitor snapshot.
    ///
    /// A cursor outside every surface leaves the state untouched.
    pub fn sample_and_update(&mut self, global: GlobalPoint, surfaces: &[Surface]) -> TickOutcome {
        self.apply_sample(CursorSample::resolve(global, surfaces))
    }

    /// Same as [`Self::sample_and_update`] for an already resolved sample
    pub fn apply_sample(&mut self, sample: CursorSample<'_>) -> TickOutcome {
        let (Some(surface), Some(local)) = (sample.surface, sample.local()) else {
            trace!("Cursor at {} is outside every monitor, skipping", sample.global);
            return TickOutcome::default();
        };
        let global = sample.global;
        let surface_changed = self.last_surface != sample.surface_id();
        let moved = surface_changed || self.last_local != Some(local);

        let mut outcome = TickOutcome::default();

        if moved {
            self.idle_count = 0;
            if self.interval != PollInterval::Fast {
                self.interval = PollInterval::Fast;
                outcome.interval_change = Some(PollInterval::Fast);
            }
            outcome.label = Some(format_label(global, local));
            if surface_changed {
                debug!("Cursor entered monitor {}", surface.label());
                outcome.move_to = Some(surface.origin);
            }
        } else if self.interval == PollInterval::Fast {
            // Only counts while fast; once slow the latch holds until movement
            self.idle_count += 1;
            if self.idle_count > self.timing.idle_threshold() {
                self.interval = PollInterval::Slow;
                outcome.interval_change = Some(PollInterval::Slow);
            }
        }

        self.last_local = Some(local);
        self.last_surface = sample.surface_id();
        outcome
    }
}

/// Text shown in the overlay label
pub fn format_label(global: GlobalPoint, local: LocalCoordinate) -> String {
    format!("Global: {global}\nLocal: {local}")
}
