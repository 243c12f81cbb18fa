//! Global cursor position source
//!
//! Bevy only reports the pointer while it is over one of its own windows,
//! so the desktop-wide position comes from `device_query` instead.

use crate::geometry::GlobalPoint;
use anyhow::{anyhow, Result};
use device_query::{DeviceQuery, DeviceState};
#[cfg(test)]
use std::{cell::Cell, rc::Rc};

/// Anything that can report where the cursor is on the virtual desktop
pub trait CursorProbe {
    fn global_position(&self) -> GlobalPoint;
}

/// Main-thread wrapper inserted as a non-send resource.
///
/// The platform connection behind `DeviceState` is not `Send` on every
/// backend, so the poller always reads it on the main thread.
pub struct CursorSource(Box<dyn CursorProbe>);

impl CursorSource {
    pub fn new(probe: impl CursorProbe + 'static) -> Self {
        Self(Box::new(probe))
    }

    pub fn global_position(&self) -> GlobalPoint {
        self.0.global_position()
    }
}

/// Reads the cursor through the platform's input APIs
pub struct DeviceQueryProbe {
    state: DeviceState,
}

impl DeviceQueryProbe {
    /// Connects to the platform input APIs.
    ///
    /// Fails when there is no display server to talk to, or on macOS when
    /// accessibility access has not been granted.
    pub fn connect() -> Result<Self> {
        let state = DeviceState::checked_new().ok_or_else(|| {
            anyhow!("Could not connect to the display server to read the cursor position")
        })?;
        Ok(Self { state })
    }
}

impl CursorProbe for DeviceQueryProbe {
    fn global_position(&self) -> GlobalPoint {
        GlobalPoint::from(self.state.get_mouse().coords)
    }
}

/// A probe that reports whatever position it was last given
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct FixedProbe {
    position: Rc<Cell<GlobalPoint>>,
}

#[cfg(test)]
impl FixedProbe {
    pub fn new(position: GlobalPoint) -> Self {
        Self {
            position: Rc::new(Cell::new(position)),
        }
    }

    /// Moves the reported cursor. Clones share the same position.
    pub fn set(&self, position: GlobalPoint) {
        self.position.set(position);
    }
}

#[cfg(test)]
impl CursorProbe for FixedProbe {
    fn global_position(&self) -> GlobalPoint {
        self.position.get()
    }
}
