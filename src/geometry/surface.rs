//! Display surfaces and point containment
//!
//! A surface is one monitor rectangle in the virtual desktop. The poller
//! works on a plain snapshot of these so the lookup stays testable without
//! a windowing backend.

use super::point::{GlobalPoint, LocalCoordinate};
use bevy::prelude::*;

/// Identifies a monitor. This is the entity carrying its `Monitor` component.
pub type SurfaceId = Entity;

/// One monitor's rectangle in global physical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub origin: GlobalPoint,
    pub width: u32,
    pub height: u32,
    pub name: Option<String>,
}

impl Surface {
    pub fn new(id: SurfaceId, origin: GlobalPoint, width: u32, height: u32) -> Self {
        Self {
            id,
            origin,
            width,
            height,
            name: None,
        }
    }

    #[cfg(test)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Half-open containment: the right and bottom edges belong to the
    /// neighbouring surface.
    pub fn contains(&self, point: GlobalPoint) -> bool {
        let x = i64::from(point.x);
        let y = i64::from(point.y);
        let left = i64::from(self.origin.x);
        let top = i64::from(self.origin.y);
        x >= left
            && y >= top
            && x < left + i64::from(self.width)
            && y < top + i64::from(self.height)
    }

    pub fn to_local(&self, point: GlobalPoint) -> LocalCoordinate {
        point - self.origin
    }

    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{name} {}x{} at {}", self.width, self.height, self.origin),
            None => format!("{}x{} at {}", self.width, self.height, self.origin),
        }
    }
}

/// Finds the first surface containing `point`, if any
pub fn surface_at(surfaces: &[Surface], point: GlobalPoint) -> Option<&Surface> {
    surfaces.iter().find(|surface| surface.contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dual_monitor_layout() -> Vec<Surface> {
        vec![
            Surface::new(Entity::from_raw(1), GlobalPoint::new(0, 0), 1920, 1080)
                .with_name("DP-1"),
            Surface::new(Entity::from_raw(2), GlobalPoint::new(1920, 0), 2560, 1440)
                .with_name("HDMI-1"),
        ]
    }

    #[test]
    fn finds_the_monitor_under_the_point() {
        let surfaces = dual_monitor_layout();

        let left = surface_at(&surfaces, GlobalPoint::new(100, 100)).unwrap();
        assert_eq!(left.id, Entity::from_raw(1));

        let right = surface_at(&surfaces, GlobalPoint::new(2000, 1200)).unwrap();
        assert_eq!(right.id, Entity::from_raw(2));
        assert_eq!(
            right.to_local(GlobalPoint::new(2000, 1200)),
            LocalCoordinate::new(80, 1200)
        );
    }

    #[test]
    fn edges_are_half_open() {
        let surfaces = dual_monitor_layout();

        // x = 1920 is the first column of the second monitor
        let edge = surface_at(&surfaces, GlobalPoint::new(1920, 0)).unwrap();
        assert_eq!(edge.id, Entity::from_raw(2));

        let last_column = surface_at(&surfaces, GlobalPoint::new(1919, 1079)).unwrap();
        assert_eq!(last_column.id, Entity::from_raw(1));
    }

    #[test]
    fn points_in_gaps_have_no_surface() {
        let surfaces = dual_monitor_layout();

        // Below the shorter left monitor
        assert!(surface_at(&surfaces, GlobalPoint::new(500, 1200)).is_none());
        assert!(surface_at(&surfaces, GlobalPoint::new(-1, 0)).is_none());
        assert!(surface_at(&[], GlobalPoint::ORIGIN).is_none());
    }

    #[test]
    fn label_mentions_name_and_geometry() {
        let surfaces = dual_monitor_layout();
        assert_eq!(surfaces[1].label(), "HDMI-1 2560x1440 at (1920, 0)");
    }
}
