//! Scene coordinate primitives.
//!
//! Scene space is in meters with Y up. The drawing surface's horizontal axis
//! maps to scene X and its vertical axis maps to scene Z, so a plan view
//! looks down the Y axis with -Z at the top.

/// A point in the deck plane (scene X/Z), in meters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub z: f64,
}

impl Point2 {
    /// The deck plane origin.
    pub const ORIGIN: Self = Self { x: 0.0, z: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Lift onto the plane at height `y`.
    pub const fn at_height(self, y: f64) -> Vec3 {
        Vec3::new(self.x, y, self.z)
    }
}

/// A point or extent in scene space, in meters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Translate by `other`.
    pub fn offset(self, other: Vec3) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

/// One edge of a rectangular footprint, as seen in plan view.
///
/// `Top` is the -Z edge, `Bottom` the +Z edge, `Left` the -X edge and
/// `Right` the +X edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// All four sides in the order layouts emit them.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

/// Corner offsets of a `width × depth` rectangle pulled in by `inset` on
/// both axes, relative to its center.
///
/// Order: (-X, -Z), (+X, -Z), (-X, +Z), (+X, +Z).
pub(crate) fn inset_corners(width: f64, depth: f64, inset: f64) -> [Point2; 4] {
    let hx = width / 2.0 - inset;
    let hz = depth / 2.0 - inset;
    [
        Point2::new(-hx, -hz),
        Point2::new(hx, -hz),
        Point2::new(-hx, hz),
        Point2::new(hx, hz),
    ]
}
