//! User interface modules for the overlay

pub mod overlay;

// Re-export commonly used items
pub use overlay::{OverlayLabel, OverlayPlugin};
