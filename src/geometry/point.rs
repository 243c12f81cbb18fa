//! Desktop coordinate types
//!
//! Two coordinate spaces are in play: the global virtual desktop spanning
//! every monitor, and the local space of a single monitor whose origin is
//! that monitor's top-left corner. Both are integer physical pixels.

use bevy::prelude::*;
use std::fmt;
use std::ops::Sub;

/// A pixel position in the combined virtual desktop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct GlobalPoint {
    pub x: i32,
    pub y: i32,
}

impl GlobalPoint {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }
}

impl From<IVec2> for GlobalPoint {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(i32, i32)> for GlobalPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GlobalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A pixel position relative to one monitor's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub struct LocalCoordinate {
    pub x: i32,
    pub y: i32,
}

impl LocalCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for LocalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Subtracting a surface origin from a global point yields a local coordinate
impl Sub for GlobalPoint {
    type Output = LocalCoordinate;

    fn sub(self, origin: GlobalPoint) -> LocalCoordinate {
        LocalCoordinate::new(self.x - origin.x, self.y - origin.y)
    }
}
