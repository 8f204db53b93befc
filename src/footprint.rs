//! Raw sketch shapes → footprints in scene coordinates.
//!
//! The sketch surface reports each object in pixels with its top-left corner
//! (`left`, `top`), unscaled extents and independent scale factors. A
//! footprint is the same region in meters, centered relative to the drawing
//! surface's origin.
//!
//! ```text
//!     scene width  = max(width  × scaleX / px_per_m, min_footprint)
//!     scene depth  = max(height × scaleY / px_per_m, min_footprint)
//!     scene center = ((left - origin_x) / px_per_m, (top - origin_y) / px_per_m)
//! ```

use alloc::vec::Vec;

use crate::config::DeckConfig;
use crate::geometry::Point2;

/// Object kind as reported by the sketch surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    Rect,
    Circle,
    /// Freehand outline; tiled as its bounding box.
    Path,
    /// Anything else the sketch surface can hold (lines, erase strokes).
    /// Never becomes a footprint.
    #[cfg_attr(feature = "serde", serde(other))]
    Other,
}

/// One object from the sketch surface, in drawing-surface pixels.
///
/// Missing extents fall back to [`DeckConfig::default_shape_extent`]; a
/// missing or zero scale factor counts as 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawShape {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: ShapeKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub left: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub top: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale_x: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale_y: Option<f64>,
}

impl RawShape {
    /// An unscaled shape of the given kind and extents.
    pub const fn new(kind: ShapeKind, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            kind,
            left,
            top,
            width: Some(width),
            height: Some(height),
            scale_x: None,
            scale_y: None,
        }
    }

    /// An axis-aligned rectangle.
    pub const fn rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(ShapeKind::Rect, left, top, width, height)
    }

    /// A circle; the sketch surface reports its diameter as both extents.
    pub const fn circle(left: f64, top: f64, radius: f64) -> Self {
        Self::new(ShapeKind::Circle, left, top, radius * 2.0, radius * 2.0)
    }

    /// Set the scale factors.
    pub fn scaled(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = Some(scale_x);
        self.scale_y = Some(scale_y);
        self
    }

    /// Convert to a footprint, or `None` for kinds that are not deck areas.
    pub fn to_footprint(&self, config: &DeckConfig) -> Option<Footprint> {
        let kind = match self.kind {
            ShapeKind::Rect | ShapeKind::Path => FootprintKind::Rectangle,
            ShapeKind::Circle => FootprintKind::Circle,
            ShapeKind::Other => return None,
        };

        let px = config.pixels_per_meter;
        let extent = |raw: Option<f64>, scale: Option<f64>| {
            let raw = finite_or_zero(raw.unwrap_or(config.default_shape_extent));
            let scale = match scale.map(finite_or_zero) {
                Some(s) if s != 0.0 => s,
                _ => 1.0,
            };
            (raw * scale / px).max(config.min_footprint)
        };
        let (ox, oz) = config.drawing_origin;

        Some(Footprint {
            kind,
            width: extent(self.width, self.scale_x),
            depth: extent(self.height, self.scale_y),
            center: Point2::new(
                (finite_or_zero(self.left) - ox) / px,
                (finite_or_zero(self.top) - oz) / px,
            ),
        })
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Footprint shape, matched exhaustively wherever layout branches on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FootprintKind {
    /// Tiled with boards.
    Rectangle,
    /// Drawn as one solid disc; never tiled.
    Circle,
}

/// A planar region of deck, in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub kind: FootprintKind,
    /// Extent along scene X.
    pub width: f64,
    /// Extent along scene Z.
    pub depth: f64,
    /// Reference position in the deck plane.
    pub center: Point2,
}

impl Footprint {
    /// A rectangular footprint.
    pub const fn rectangle(width: f64, depth: f64, center: Point2) -> Self {
        Self {
            kind: FootprintKind::Rectangle,
            width,
            depth,
            center,
        }
    }

    /// A circular footprint of the given diameter.
    pub const fn circle(diameter: f64, center: Point2) -> Self {
        Self {
            kind: FootprintKind::Circle,
            width: diameter,
            depth: diameter,
            center,
        }
    }

    pub fn is_circle(&self) -> bool {
        self.kind == FootprintKind::Circle
    }
}

/// Convert every deck-area shape, preserving sketch order.
pub fn derive_footprints(shapes: &[RawShape], config: &DeckConfig) -> Vec<Footprint> {
    shapes
        .iter()
        .filter_map(|s| s.to_footprint(config))
        .collect()
}
