//! Physical constants for deck layout and boundary validation.
//!
//! Every length is in meters unless the field says otherwise. The sketch
//! conversion fields (`pixels_per_meter`, `drawing_origin`,
//! `default_shape_extent`) are in drawing-surface pixels.
//!
//! # Example
//!
//! ```
//! use decklayout::DeckConfig;
//!
//! let config = DeckConfig::freeform().board_gap(0.004);
//! assert!(config.validate().is_ok());
//! assert!((config.board_pitch() - 0.142).abs() < 1e-12);
//! ```

use core::fmt;

/// Board width of the fixed-rectangle deck tool.
pub const RECT_BOARD_WIDTH: f64 = 0.14;
/// Gap between boards on the fixed-rectangle deck tool.
pub const RECT_BOARD_GAP: f64 = 0.01;
/// Board width of the freeform sketch tool (138 mm).
pub const FREEFORM_BOARD_WIDTH: f64 = 0.138;
/// Gap between boards on the freeform sketch tool (6 mm).
pub const FREEFORM_BOARD_GAP: f64 = 0.006;

/// Physical dimensions and conversion factors used by every layout.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckConfig {
    /// Nominal width of one board.
    pub board_width: f64,
    /// Nominal gap between adjacent boards.
    pub board_gap: f64,
    /// Board thickness (vertical extent of the deck surface).
    pub board_thickness: f64,
    /// Height of the supporting frame; boards sit on top of it.
    pub frame_height: f64,
    /// Thickness of the perimeter rails on a rectangular deck.
    pub rail_thickness: f64,
    /// Height of each support leg.
    pub leg_height: f64,
    /// Distance each leg is pulled in from its footprint corner on both axes.
    pub leg_inset: f64,
    /// Leg radius at the top (under the frame).
    pub leg_radius_top: f64,
    /// Leg radius at the ground.
    pub leg_radius_bottom: f64,
    /// Smallest width or depth a sketched footprint may have.
    pub min_footprint: f64,
    /// Drawing-surface pixels per scene meter.
    pub pixels_per_meter: f64,
    /// Drawing-surface point that maps to the scene origin, in pixels.
    pub drawing_origin: (f64, f64),
    /// Extent used for a sketched shape that reports no width or height, in pixels.
    pub default_shape_extent: f64,
    /// Edge length of the placeholder block shown when nothing is sketched.
    pub placeholder_size: f64,
}

impl DeckConfig {
    /// Constants of the fixed-rectangle deck tool (0.14 m boards, 0.01 m gaps).
    pub const fn rectangular() -> Self {
        Self {
            board_width: RECT_BOARD_WIDTH,
            board_gap: RECT_BOARD_GAP,
            ..Self::freeform()
        }
    }

    /// Constants of the freeform sketch tool (138 mm boards, 6 mm gaps).
    pub const fn freeform() -> Self {
        Self {
            board_width: FREEFORM_BOARD_WIDTH,
            board_gap: FREEFORM_BOARD_GAP,
            board_thickness: 0.03,
            frame_height: 0.3,
            rail_thickness: 0.1,
            leg_height: 0.5,
            leg_inset: 0.2,
            leg_radius_top: 0.05,
            leg_radius_bottom: 0.08,
            min_footprint: 0.5,
            pixels_per_meter: 100.0,
            drawing_origin: (400.0, 300.0),
            default_shape_extent: 100.0,
            placeholder_size: 0.5,
        }
    }

    /// Set the nominal board width.
    pub fn board_width(mut self, width: f64) -> Self {
        self.board_width = width;
        self
    }

    /// Set the nominal gap between boards.
    pub fn board_gap(mut self, gap: f64) -> Self {
        self.board_gap = gap;
        self
    }

    /// Set the board thickness.
    pub fn board_thickness(mut self, thickness: f64) -> Self {
        self.board_thickness = thickness;
        self
    }

    /// Set the frame height.
    pub fn frame_height(mut self, height: f64) -> Self {
        self.frame_height = height;
        self
    }

    /// Set leg height and corner inset.
    pub fn legs(mut self, height: f64, inset: f64) -> Self {
        self.leg_height = height;
        self.leg_inset = inset;
        self
    }

    /// Set the minimum footprint width/depth for sketched shapes.
    pub fn min_footprint(mut self, min: f64) -> Self {
        self.min_footprint = min;
        self
    }

    /// Set the sketch-to-scene conversion: pixels per meter and the pixel
    /// position of the scene origin.
    pub fn drawing_surface(mut self, pixels_per_meter: f64, origin: (f64, f64)) -> Self {
        self.pixels_per_meter = pixels_per_meter;
        self.drawing_origin = origin;
        self
    }

    /// Center-to-center distance of boards at nominal spacing.
    pub fn board_pitch(&self) -> f64 {
        self.board_width + self.board_gap
    }

    /// Height of the deck surface's center above the ground plane.
    pub fn surface_height(&self) -> f64 {
        self.frame_height + self.board_thickness / 2.0
    }

    /// Check that every constant is usable by the layout algorithms.
    ///
    /// Board width, thickness and the pixel scale must be positive; the gap,
    /// heights, insets and minimum footprint may be zero but not negative.
    /// Everything must be finite.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            self.board_width,
            self.board_thickness,
            self.pixels_per_meter,
        ];
        let non_negative = [
            self.board_gap,
            self.frame_height,
            self.rail_thickness,
            self.leg_height,
            self.leg_inset,
            self.leg_radius_top,
            self.leg_radius_bottom,
            self.min_footprint,
            self.default_shape_extent,
            self.placeholder_size,
        ];
        let origin = [self.drawing_origin.0, self.drawing_origin.1];
        if positive
            .iter()
            .chain(non_negative.iter())
            .chain(origin.iter())
            .any(|v| !v.is_finite())
        {
            return Err(LayoutError::NonFiniteValue);
        }
        if positive.iter().any(|&v| v <= 0.0) {
            return Err(LayoutError::InvalidConfig);
        }
        if non_negative.iter().any(|&v| v < 0.0) {
            return Err(LayoutError::InvalidConfig);
        }
        Ok(())
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::freeform()
    }
}

/// Layout computation error.
///
/// Only raised at the input boundary; once inputs validate, layout cannot fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Deck width or length is zero or negative.
    NonPositiveDimension,
    /// An input dimension or constant is NaN or infinite.
    NonFiniteValue,
    /// A [`DeckConfig`] constant is out of range.
    InvalidConfig,
    /// The deck would need more than [`MAX_BOARDS`](crate::tiling::MAX_BOARDS)
    /// boards at the configured pitch.
    TooManyBoards,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveDimension => f.write_str("deck width and length must be positive"),
            Self::NonFiniteValue => f.write_str("dimension is not a finite number"),
            Self::InvalidConfig => f.write_str("deck configuration constant out of range"),
            Self::TooManyBoards => f.write_str("deck needs too many boards at this pitch"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}
