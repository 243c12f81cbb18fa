//! Geometric Primitives for the virtual desktop

pub mod point;
pub mod surface;

// Re-export commonly used items
pub use point::{GlobalPoint, LocalCoordinate};
pub use surface::{surface_at, Surface, SurfaceId};
