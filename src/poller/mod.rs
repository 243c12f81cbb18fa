//! Coordinate poller
//!
//! Samples the global cursor, works out which monitor it is on and keeps the
//! overlay label current. Polls every fast period while the cursor moves and
//! drops to the slow period once it has been still for a while.

pub mod state;
pub mod systems;

pub use state::{format_label, CursorSample, PollInterval, PollState, PollTiming, TickOutcome};
pub use systems::{on_pointer_motion, on_poll_timer, PollTimer, PollerContext, PollerPlugin, PollerSet};
