//! Monitor layout from Bevy's `Monitor` entities
//!
//! `bevy_winit` spawns one entity per connected monitor and despawns it on
//! disconnect. The layout is rebuilt only on those changes, so a poll step
//! reads it without allocating.

use crate::geometry::{GlobalPoint, Surface};
use bevy::prelude::*;
use bevy::window::Monitor;

/// Converts a Bevy monitor into the poller's surface rectangle
pub fn surface_from_monitor(entity: Entity, monitor: &Monitor) -> Surface {
    Surface {
        id: entity,
        origin: GlobalPoint::from(monitor.physical_position),
        width: monitor.physical_width,
        height: monitor.physical_height,
        name: monitor.name.clone(),
    }
}

/// Collects every known monitor into a surface list
pub fn snapshot<'a>(monitors: impl IntoIterator<Item = (Entity, &'a Monitor)>) -> Vec<Surface> {
    monitors
        .into_iter()
        .map(|(entity, monitor)| surface_from_monitor(entity, monitor))
        .collect()
}

/// Current monitor rectangles, in spawn order
#[derive(Resource, Debug, Clone, Default)]
pub struct MonitorLayout {
    surfaces: Vec<Surface>,
    rebuilds: u32,
}

impl MonitorLayout {
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// How many times the layout was rebuilt
    pub fn rebuilds(&self) -> u32 {
        self.rebuilds
    }
}

/// Rebuilds the layout when a monitor is connected, changed or removed
pub fn track_monitors(
    mut layout: ResMut<MonitorLayout>,
    monitors: Query<(Entity, &Monitor)>,
    added: Query<Entity, Added<Monitor>>,
    changed: Query<(), Changed<Monitor>>,
    mut removed: RemovedComponents<Monitor>,
) {
    let mut dirty = !changed.is_empty();
    for entity in removed.read() {
        info!("Monitor disconnected: {:?}", entity);
        dirty = true;
    }
    if !dirty {
        return;
    }

    layout.surfaces = snapshot(monitors.iter());
    layout.rebuilds += 1;
    for surface in &layout.surfaces {
        if added.contains(surface.id) {
            info!("Monitor connected: {}", surface.label());
        }
    }
}

#[cfg(test)]
pub(crate) fn test_monitor(position: IVec2, width: u32, height: u32) -> Monitor {
    Monitor {
        name: None,
        physical_height: height,
        physical_width: width,
        physical_position: position,
        refresh_rate_millihertz: None,
        scale_factor: 1.0,
        video_modes: Vec::new(),
    }
}
