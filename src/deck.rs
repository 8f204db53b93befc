//! Fixed rectangular deck with an orientation flag.
//!
//! The deck is `width` along scene X and `length` along scene Z, centered on
//! the origin. Boards are full length and tile across the axis perpendicular
//! to the orientation.
//!
//! ```text
//!     AlongWidth                     AlongLength
//!     (boards ∥ X, tile across Z)    (boards ∥ Z, tile across X)
//!     ┌──────────────┐               ┌┬┬┬┬┬┬┬┬┬┬┬┬┐
//!     ├──────────────┤               ││││││││││││││
//!     ├──────────────┤               ││││││││││││││
//!     ├──────────────┤               ││││││││││││││
//!     └──────────────┘               └┴┴┴┴┴┴┴┴┴┴┴┴┘
//! ```
//!
//! # Example
//!
//! ```
//! use decklayout::{DeckConfig, Orientation, RectDeck};
//!
//! let layout = RectDeck::new(4.0, 6.0, Orientation::AlongLength)
//!     .compute(&DeckConfig::rectangular())
//!     .unwrap();
//!
//! // Boards are 6 m long and tile across the 4 m width
//! assert_eq!(layout.boards.len(), 26);
//! assert_eq!(layout.boards[0].width, 6.0);
//! ```

use alloc::vec::Vec;
use core::f64::consts::FRAC_PI_2;

use crate::config::{DeckConfig, LayoutError};
use crate::geometry::{Point2, Side, Vec3, inset_corners};
use crate::tiling::{Board, BoardRun, Leg, MAX_BOARDS};

/// Direction the boards' long axis runs in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Boards run parallel to the deck width (scene X) and tile across the length.
    #[default]
    AlongWidth,
    /// Boards run parallel to the deck length (scene Z) and tile across the width.
    AlongLength,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Self::AlongWidth => Self::AlongLength,
            Self::AlongLength => Self::AlongWidth,
        }
    }

    /// Rotation about the vertical axis that turns a board's local long axis
    /// (X) into this orientation.
    pub fn yaw(self) -> f64 {
        match self {
            Self::AlongWidth => 0.0,
            Self::AlongLength => FRAC_PI_2,
        }
    }
}

/// Input for the rectangular deck.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RectDeck {
    /// Extent along scene X, in meters.
    pub width: f64,
    /// Extent along scene Z, in meters.
    pub length: f64,
    pub orientation: Orientation,
}

impl RectDeck {
    /// Create a deck description.
    pub const fn new(width: f64, length: f64, orientation: Orientation) -> Self {
        Self {
            width,
            length,
            orientation,
        }
    }

    /// Set the board orientation.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Length of each board: the dimension the boards run along.
    pub fn board_length(&self) -> f64 {
        match self.orientation {
            Orientation::AlongWidth => self.width,
            Orientation::AlongLength => self.length,
        }
    }

    /// The dimension boards are laid side by side across.
    pub fn tiling_dimension(&self) -> f64 {
        match self.orientation {
            Orientation::AlongWidth => self.length,
            Orientation::AlongLength => self.width,
        }
    }

    /// Compute the board, frame and leg layout.
    pub fn compute(&self, config: &DeckConfig) -> Result<DeckLayout, LayoutError> {
        if !self.width.is_finite() || !self.length.is_finite() {
            return Err(LayoutError::NonFiniteValue);
        }
        if self.width <= 0.0 || self.length <= 0.0 {
            return Err(LayoutError::NonPositiveDimension);
        }
        config.validate()?;
        if self.tiling_dimension() / config.board_pitch() > MAX_BOARDS as f64 {
            return Err(LayoutError::TooManyBoards);
        }

        // Step 1: Tile across the dimension perpendicular to the boards.
        let run = BoardRun::new(self.tiling_dimension(), config.board_pitch());
        let boards = run.boards(self.board_length(), config.board_width, false);

        tracing::debug!(
            width = self.width,
            length = self.length,
            boards = run.count,
            spacing = run.spacing,
            "rectangular deck layout"
        );

        // Step 2: Perimeter rails sitting under the boards.
        let rails = self.rails(config);

        // Step 3: One leg per corner, hanging below the frame.
        let legs = inset_corners(self.width, self.length, config.leg_inset).map(|corner| Leg {
            position: corner.at_height(-config.leg_height / 2.0),
            height: config.leg_height,
            radius_top: config.leg_radius_top,
            radius_bottom: config.leg_radius_bottom,
        });

        Ok(DeckLayout {
            deck: *self,
            boards,
            spacing: run.spacing,
            surface_height: config.surface_height(),
            board_thickness: config.board_thickness,
            rails,
            legs,
        })
    }

    fn rails(&self, config: &DeckConfig) -> [FrameRail; 4] {
        let (w, l) = (self.width, self.length);
        let t = config.rail_thickness;
        let y = config.frame_height / 2.0;
        Side::ALL.map(|side| {
            let (center, size) = match side {
                Side::Top => (Point2::new(0.0, -l / 2.0), (w, t)),
                Side::Bottom => (Point2::new(0.0, l / 2.0), (w, t)),
                Side::Left => (Point2::new(-w / 2.0, 0.0), (t, l)),
                Side::Right => (Point2::new(w / 2.0, 0.0), (t, l)),
            };
            FrameRail {
                side,
                center: center.at_height(y),
                size: Vec3::new(size.0, config.frame_height, size.1),
            }
        })
    }
}

/// One perimeter rail of a rectangular deck's frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRail {
    pub side: Side,
    /// Center of the rail box in scene coordinates.
    pub center: Vec3,
    /// Box extents along X, Y and Z.
    pub size: Vec3,
}

/// Computed rectangular deck.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckLayout {
    /// The input this layout was computed from.
    pub deck: RectDeck,
    /// Boards in order from the negative end of the tiling axis.
    pub boards: Vec<Board>,
    /// Actual center-to-center board spacing. Zero when no board fits.
    pub spacing: f64,
    /// Height of the board centers above the ground plane.
    pub surface_height: f64,
    pub board_thickness: f64,
    pub rails: [FrameRail; 4],
    pub legs: [Leg; 4],
}

impl DeckLayout {
    /// Rotation about Y applied to every board.
    pub fn board_yaw(&self) -> f64 {
        self.deck.orientation.yaw()
    }

    /// Scene position of a board's center.
    pub fn board_center(&self, board: &Board) -> Vec3 {
        match self.deck.orientation {
            Orientation::AlongWidth => Vec3::new(0.0, self.surface_height, board.offset),
            Orientation::AlongLength => Vec3::new(board.offset, self.surface_height, 0.0),
        }
    }

    /// Axis-aligned extents of a board after rotation (X, Y, Z).
    pub fn board_extents(&self, board: &Board) -> Vec3 {
        match self.deck.orientation {
            Orientation::AlongWidth => Vec3::new(board.width, self.board_thickness, board.depth),
            Orientation::AlongLength => Vec3::new(board.depth, self.board_thickness, board.width),
        }
    }

    /// Total span covered by the boards along the tiling axis.
    pub fn covered_span(&self) -> f64 {
        self.spacing * self.boards.len() as f64
    }
}
