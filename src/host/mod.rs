//! Host environment access
//!
//! The two things the poller needs from outside Bevy's world:
//! - where the cursor is on the whole desktop
//! - which monitors exist and where they sit

pub mod cursor;
pub mod monitors;

pub use cursor::{CursorProbe, CursorSource, DeviceQueryProbe};
