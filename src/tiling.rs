//! Board runs: how many boards fit across a span and where each one sits.
//!
//! Both deck strategies tile the same way. Count how many boards fit at the
//! nominal pitch (`board_width + gap`), then stretch the spacing so the run
//! covers the span edge to edge, centered on the footprint.
//!
//! ```text
//!     span = 1.0, pitch = 0.3  →  count = 3, spacing = 0.333…
//!
//!     |<--------------- span --------------->|
//!     |   [board]   |   [board]   |   [board]   |
//!     -0.5        -0.167        0.167        0.5
//!          ^-0.333        ^0           ^0.333      (offsets)
//! ```
//!
//! The count is floored, so the last partial pitch is absorbed by the
//! stretched spacing rather than left as an uncovered strip.

use alloc::vec::Vec;
use num_traits::Float;

use crate::geometry::Vec3;

/// Relative slack applied before flooring the board count.
///
/// `6.0 / (0.14 + 0.01)` is `39.99999999999999` in binary floating point;
/// without slack an exact fit loses its last board.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on boards in one run.
///
/// Far beyond any real deck (a kilometer of 10 mm boards); a run that would
/// need more is clamped here instead of allocating without bound.
pub const MAX_BOARDS: usize = 100_000;

/// Material role of a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardRole {
    /// An ordinary deck board.
    #[default]
    Normal,
    /// The accent board near the center, drawn in the frame material.
    Breaker,
}

/// One board of a run, in its footprint's local frame.
///
/// The board's long axis is local X. `offset` is the position of its center
/// along the tiling axis (local Z) relative to the footprint center; it is
/// always centered on the other axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    /// Center offset along the tiling axis.
    pub offset: f64,
    /// Extent along the board's long axis.
    pub width: f64,
    /// Extent across the board (the nominal board width).
    pub depth: f64,
    pub role: BoardRole,
}

impl Board {
    /// Whether this board carries the breaker accent.
    pub fn is_breaker(&self) -> bool {
        self.role == BoardRole::Breaker
    }
}

/// Count, spacing and placement of boards across one span.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardRun {
    /// The span being tiled.
    pub span: f64,
    /// Number of boards that fit at nominal pitch.
    pub count: usize,
    /// Actual center-to-center distance (`span / count`). Zero when `count` is zero.
    pub spacing: f64,
}

impl BoardRun {
    /// Tile `span` with boards at nominal `pitch`.
    ///
    /// A span or pitch that is not strictly positive (including NaN) yields
    /// an empty run. Spacing is only computed when at least one board fits.
    /// The count never exceeds [`MAX_BOARDS`].
    pub fn new(span: f64, pitch: f64) -> Self {
        let count = board_count(span, pitch);
        let spacing = if count == 0 { 0.0 } else { span / count as f64 };
        Self {
            span,
            count,
            spacing,
        }
    }

    /// A run over `span` that holds no boards.
    pub const fn empty(span: f64) -> Self {
        Self {
            span,
            count: 0,
            spacing: 0.0,
        }
    }

    /// Whether no board fits.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Center offset of board `index`, relative to the middle of the span.
    pub fn offset(&self, index: usize) -> f64 {
        -self.span / 2.0 + index as f64 * self.spacing + self.spacing / 2.0
    }

    /// Offsets of every board, in order from the negative end.
    pub fn offsets(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| self.offset(i))
    }

    /// Index of the board that takes the breaker accent, if the run is long
    /// enough to carry one (more than four boards).
    pub fn breaker_index(&self) -> Option<usize> {
        (self.count > 4).then_some(self.count / 2)
    }

    /// Build the board list: every board `length` long and `board_width`
    /// across, with the breaker role applied when `breaker` is set.
    ///
    /// The breaker is a role substitution on an existing board; it never
    /// adds a board or changes geometry.
    pub fn boards(&self, length: f64, board_width: f64, breaker: bool) -> Vec<Board> {
        let accent = if breaker { self.breaker_index() } else { None };
        self.offsets()
            .enumerate()
            .map(|(i, offset)| Board {
                offset,
                width: length,
                depth: board_width,
                role: if Some(i) == accent {
                    BoardRole::Breaker
                } else {
                    BoardRole::Normal
                },
            })
            .collect()
    }
}

/// Number of boards at nominal `pitch` that fit in `span`, at most
/// [`MAX_BOARDS`].
pub fn board_count(span: f64, pitch: f64) -> usize {
    // Also rejects NaN.
    if !(span > 0.0 && pitch > 0.0) {
        return 0;
    }
    let ratio = span / pitch;
    if !ratio.is_finite() {
        return 0;
    }
    Float::floor(ratio + ratio * COUNT_TOLERANCE).min(MAX_BOARDS as f64) as usize
}

/// One support leg: a tapered cylinder standing under a footprint corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Center of the cylinder in scene coordinates.
    pub position: Vec3,
    pub height: f64,
    pub radius_top: f64,
    pub radius_bottom: f64,
}
