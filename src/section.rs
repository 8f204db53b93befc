//! Freeform sections: each sketched footprint tiled independently.
//!
//! Within a section, boards always run along X (the footprint width) and
//! tile across Z (the depth). With the picture frame enabled, a ring of
//! board-width strips lines the footprint edge and the boards fill what is
//! left inside it:
//!
//! ```text
//!     ┌──────────────────────┐  ← top strip, full outer width
//!     │┌────────────────────┐│
//!     ││════════════════════││
//!     ││════════════════════││  ← boards, inner width × board width
//!     ││▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓││  ← breaker (index n/2, when n > 4)
//!     ││════════════════════││
//!     │└────────────────────┘│  ← left/right strips span inner depth only
//!     └──────────────────────┘  ← bottom strip
//! ```
//!
//! # Example
//!
//! ```
//! use decklayout::{DeckConfig, FreeformInput, RawShape};
//!
//! let input = FreeformInput::new(vec![RawShape::rect(300.0, 200.0, 200.0, 200.0)])
//!     .picture_frame(true)
//!     .breaker_placement(true);
//! let layout = input.compute(&DeckConfig::freeform()).unwrap();
//!
//! let section = &layout.sections()[0];
//! let boards = section.surface.boards();
//! assert_eq!(boards.len(), 11);
//! assert!(boards[5].is_breaker());
//! ```

use alloc::vec::Vec;

use crate::config::{DeckConfig, LayoutError};
use crate::footprint::{Footprint, FootprintKind, RawShape, derive_footprints};
use crate::geometry::{Point2, Side, Vec3, inset_corners};
use crate::tiling::{Board, BoardRun, Leg};

/// Decorative options applied to every rectangular section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionOptions {
    /// Line each section with a board-width border and tile inside it.
    pub picture_frame: bool,
    /// Give the center board the breaker accent.
    pub breaker: bool,
}

/// Input for the freeform strategy: the sketch plus its options.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FreeformInput {
    pub shapes: Vec<RawShape>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub picture_frame: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub breaker_placement: bool,
}

impl FreeformInput {
    /// Sketch with both options off.
    pub fn new(shapes: Vec<RawShape>) -> Self {
        Self {
            shapes,
            picture_frame: false,
            breaker_placement: false,
        }
    }

    /// Enable or disable the picture frame.
    pub fn picture_frame(mut self, enabled: bool) -> Self {
        self.picture_frame = enabled;
        self
    }

    /// Enable or disable the breaker board.
    pub fn breaker_placement(mut self, enabled: bool) -> Self {
        self.breaker_placement = enabled;
        self
    }

    pub fn options(&self) -> SectionOptions {
        SectionOptions {
            picture_frame: self.picture_frame,
            breaker: self.breaker_placement,
        }
    }

    /// Derive footprints from the sketch and lay out every section.
    ///
    /// Fails only when `config` does not [validate](DeckConfig::validate).
    pub fn compute(&self, config: &DeckConfig) -> Result<FreeformLayout, LayoutError> {
        config.validate()?;
        let footprints = derive_footprints(&self.shapes, config);
        layout_sections(&footprints, config, self.options())
    }
}

/// One strip of a picture-frame border, in the section's local frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramePiece {
    pub side: Side,
    /// Strip center relative to the footprint center.
    pub center: Point2,
    /// Extent along X.
    pub width: f64,
    /// Extent along Z.
    pub depth: f64,
}

/// The four strips of a picture frame.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameBorder {
    pub pieces: [FramePiece; 4],
}

impl FrameBorder {
    /// Border of `strip`-wide pieces lining a `width × depth` footprint.
    ///
    /// Top and bottom strips span the full width; left and right strips span
    /// only the depth between them so corners are covered once. When the
    /// strips meet, the side pieces collapse to zero depth.
    pub fn new(width: f64, depth: f64, strip: f64) -> Self {
        let inner_depth = (depth - 2.0 * strip).max(0.0);
        let pieces = Side::ALL.map(|side| match side {
            Side::Top => FramePiece {
                side,
                center: Point2::new(0.0, -depth / 2.0 + strip / 2.0),
                width,
                depth: strip,
            },
            Side::Bottom => FramePiece {
                side,
                center: Point2::new(0.0, depth / 2.0 - strip / 2.0),
                width,
                depth: strip,
            },
            Side::Left => FramePiece {
                side,
                center: Point2::new(-width / 2.0 + strip / 2.0, 0.0),
                width: strip,
                depth: inner_depth,
            },
            Side::Right => FramePiece {
                side,
                center: Point2::new(width / 2.0 - strip / 2.0, 0.0),
                width: strip,
                depth: inner_depth,
            },
        });
        Self { pieces }
    }

    /// The piece on one side.
    pub fn piece(&self, side: Side) -> &FramePiece {
        // `pieces` is built in `Side::ALL` order.
        let index = match side {
            Side::Top => 0,
            Side::Bottom => 1,
            Side::Left => 2,
            Side::Right => 3,
        };
        &self.pieces[index]
    }
}

/// What covers a section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Surface {
    /// Tiled boards, optionally inside a picture frame.
    Boards {
        boards: Vec<Board>,
        frame: Option<FrameBorder>,
        /// The run the boards were placed from.
        run: BoardRun,
        /// Width available to boards after the frame inset.
        inner_width: f64,
    },
    /// One solid disc; frame and breaker options do not apply.
    Disc { radius: f64 },
}

impl Surface {
    /// Boards of a tiled surface; empty for discs.
    pub fn boards(&self) -> &[Board] {
        match self {
            Self::Boards { boards, .. } => boards,
            Self::Disc { .. } => &[],
        }
    }

    /// Picture frame of a tiled surface, if enabled.
    pub fn frame(&self) -> Option<&FrameBorder> {
        match self {
            Self::Boards { frame, .. } => frame.as_ref(),
            Self::Disc { .. } => None,
        }
    }
}

/// One laid-out footprint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionLayout {
    pub footprint: Footprint,
    /// Scene position of the surface center; boards and frame pieces are
    /// relative to it.
    pub origin: Vec3,
    pub board_thickness: f64,
    pub surface: Surface,
    /// Legs in scene coordinates.
    pub legs: [Leg; 4],
}

impl SectionLayout {
    /// Lay out one footprint.
    pub fn compute(footprint: &Footprint, config: &DeckConfig, options: SectionOptions) -> Self {
        let surface = match footprint.kind {
            FootprintKind::Rectangle => tile(footprint, config, options),
            FootprintKind::Circle => Surface::Disc {
                radius: footprint.width / 2.0,
            },
        };

        let origin = footprint.center.at_height(config.surface_height());
        let leg_y = origin.y - config.frame_height - config.leg_height / 2.0;
        let legs = inset_corners(footprint.width, footprint.depth, config.leg_inset).map(|c| Leg {
            position: Vec3::new(origin.x + c.x, leg_y, origin.z + c.z),
            height: config.leg_height,
            radius_top: config.leg_radius_top,
            radius_bottom: config.leg_radius_bottom,
        });

        Self {
            footprint: *footprint,
            origin,
            board_thickness: config.board_thickness,
            surface,
            legs,
        }
    }

    /// Scene position of a board's center.
    pub fn board_center(&self, board: &Board) -> Vec3 {
        self.origin.offset(Vec3::new(0.0, 0.0, board.offset))
    }

    /// Scene position of a frame piece's center.
    pub fn frame_center(&self, piece: &FramePiece) -> Vec3 {
        self.origin.offset(piece.center.at_height(0.0))
    }
}

fn tile(footprint: &Footprint, config: &DeckConfig, options: SectionOptions) -> Surface {
    // Step 1: Shrink the tileable area by the frame strips.
    let inset = if options.picture_frame {
        config.board_width
    } else {
        0.0
    };
    let inner_width = footprint.width - 2.0 * inset;
    let inner_depth = footprint.depth - 2.0 * inset;

    // Step 2: Boards across the inner depth, breaker swapped in at the center.
    // A frame wider than the footprint leaves no room for boards at all.
    let run = if inner_width > 0.0 {
        BoardRun::new(inner_depth, config.board_pitch())
    } else {
        BoardRun::empty(inner_depth)
    };
    let boards = run.boards(inner_width, config.board_width, options.breaker);

    // Step 3: Frame strips in the inset band.
    let frame = options
        .picture_frame
        .then(|| FrameBorder::new(footprint.width, footprint.depth, inset));

    tracing::debug!(
        width = footprint.width,
        depth = footprint.depth,
        boards = run.count,
        framed = options.picture_frame,
        "section layout"
    );

    Surface::Boards {
        boards,
        frame,
        run,
        inner_width,
    }
}

/// Shown in place of the deck when nothing has been sketched.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placeholder {
    /// Cube center in scene coordinates.
    pub center: Vec3,
    /// Cube edge length.
    pub size: f64,
}

/// Computed freeform deck.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreeformLayout {
    /// No footprints: a single block stands in for the deck.
    Placeholder(Placeholder),
    /// One layout per footprint, in sketch order.
    Sections(Vec<SectionLayout>),
}

impl FreeformLayout {
    /// Laid-out sections; empty for the placeholder.
    pub fn sections(&self) -> &[SectionLayout] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Sections(sections) => sections,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// Total boards across all sections.
    pub fn board_count(&self) -> usize {
        self.sections()
            .iter()
            .map(|s| s.surface.boards().len())
            .sum()
    }
}

/// Lay out every footprint with the same options.
///
/// An empty footprint list yields [`FreeformLayout::Placeholder`] rather than
/// an empty layout. Fails only when `config` does not
/// [validate](DeckConfig::validate).
pub fn layout_sections(
    footprints: &[Footprint],
    config: &DeckConfig,
    options: SectionOptions,
) -> Result<FreeformLayout, LayoutError> {
    config.validate()?;
    if footprints.is_empty() {
        tracing::debug!("no footprints, using placeholder");
        return Ok(FreeformLayout::Placeholder(Placeholder {
            center: Vec3::new(0.0, config.frame_height / 2.0, 0.0),
            size: config.placeholder_size,
        }));
    }
    Ok(FreeformLayout::Sections(
        footprints
            .iter()
            .map(|fp| SectionLayout::compute(fp, config, options))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiling::BoardRole;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn square(side: f64) -> Footprint {
        Footprint::rectangle(side, side, Point2::ORIGIN)
    }

    fn framed() -> SectionOptions {
        SectionOptions {
            picture_frame: true,
            breaker: false,
        }
    }

    // ── tiling ──────────────────────────────────────────────────────────

    #[test]
    fn unframed_section_tiles_full_depth() {
        let s = SectionLayout::compute(
            &Footprint::rectangle(3.0, 2.0, Point2::ORIGIN),
            &DeckConfig::freeform(),
            SectionOptions::default(),
        );
        let boards = s.surface.boards();
        // 2.0 / 0.144 = 13.9
        assert_eq!(boards.len(), 13);
        assert!(boards.iter().all(|b| b.width == 3.0 && b.depth == 0.138));
        assert!(approx(boards[0].offset + boards[12].offset, 0.0));
        assert!(s.surface.frame().is_none());
    }

    #[test]
    fn picture_frame_shrinks_inner_area() {
        let s = SectionLayout::compute(&square(2.0), &DeckConfig::freeform(), framed());
        let Surface::Boards {
            boards,
            run,
            inner_width,
            ..
        } = &s.surface
        else {
            panic!("expected boards");
        };
        assert!(approx(run.span, 1.724));
        assert!(approx(*inner_width, 1.724));
        assert_eq!(boards.len(), 11);
        assert!(approx(run.spacing, 1.724 / 11.0));
        assert!(approx(boards[0].offset, -0.862 + run.spacing / 2.0));
    }

    #[test]
    fn boards_do_not_overlap() {
        let s = SectionLayout::compute(&square(2.0), &DeckConfig::freeform(), framed());
        let boards = s.surface.boards();
        for pair in boards.windows(2) {
            assert!(pair[1].offset - pair[0].offset >= pair[0].depth);
        }
    }

    // ── breaker ─────────────────────────────────────────────────────────

    #[test]
    fn breaker_tags_center_board() {
        let options = SectionOptions {
            picture_frame: true,
            breaker: true,
        };
        let s = SectionLayout::compute(&square(2.0), &DeckConfig::freeform(), options);
        let roles: Vec<BoardRole> = s.surface.boards().iter().map(|b| b.role).collect();
        assert_eq!(roles.len(), 11);
        assert_eq!(roles.iter().filter(|r| **r == BoardRole::Breaker).count(), 1);
        assert_eq!(roles[5], BoardRole::Breaker);
    }

    #[test]
    fn breaker_ignored_for_short_runs() {
        // 0.7 / 0.144 = 4.86 → 4 boards
        let options = SectionOptions {
            picture_frame: false,
            breaker: true,
        };
        let fp = Footprint::rectangle(2.0, 0.7, Point2::ORIGIN);
        let s = SectionLayout::compute(&fp, &DeckConfig::freeform(), options);
        assert_eq!(s.surface.boards().len(), 4);
        assert!(s.surface.boards().iter().all(|b| !b.is_breaker()));
    }

    // ── picture frame ───────────────────────────────────────────────────

    #[test]
    fn frame_ring_geometry() {
        let fp = Footprint::rectangle(3.0, 2.0, Point2::ORIGIN);
        let s = SectionLayout::compute(&fp, &DeckConfig::freeform(), framed());
        let frame = s.surface.frame().unwrap();

        let top = frame.piece(Side::Top);
        assert_eq!(top.width, 3.0);
        assert!(approx(top.depth, 0.138));
        assert!(approx(top.center.z, -1.0 + 0.069));

        let bottom = frame.piece(Side::Bottom);
        assert!(approx(bottom.center.z, 1.0 - 0.069));

        let left = frame.piece(Side::Left);
        assert!(approx(left.width, 0.138));
        assert!(approx(left.depth, 2.0 - 0.276));
        assert!(approx(left.center.x, -1.5 + 0.069));

        let right = frame.piece(Side::Right);
        assert!(approx(right.center.x, 1.5 - 0.069));
        assert_eq!(right.center.z, 0.0);
    }

    #[test]
    fn zero_board_section_keeps_frame_and_legs() {
        let fp = Footprint::rectangle(0.5, 0.5, Point2::ORIGIN);
        let s = SectionLayout::compute(&fp, &DeckConfig::freeform(), framed());
        // inner depth 0.224 fits one board; shrink the config so none fit
        assert_eq!(s.surface.boards().len(), 1);

        let cfg = DeckConfig::freeform().board_width(0.2);
        let s = SectionLayout::compute(&fp, &cfg, framed());
        assert!(s.surface.boards().is_empty());
        assert!(s.surface.frame().is_some());
        assert_eq!(s.legs.len(), 4);
    }

    // ── circles ─────────────────────────────────────────────────────────

    #[test]
    fn circle_is_a_disc() {
        let options = SectionOptions {
            picture_frame: true,
            breaker: true,
        };
        let fp = Footprint::circle(3.0, Point2::new(1.0, 1.0));
        let s = SectionLayout::compute(&fp, &DeckConfig::freeform(), options);
        assert_eq!(s.surface, Surface::Disc { radius: 1.5 });
        assert!(s.surface.boards().is_empty());
        assert!(s.surface.frame().is_none());
        assert_eq!(s.legs.len(), 4);
    }

    // ── placement ───────────────────────────────────────────────────────

    #[test]
    fn section_positions_in_scene() {
        let cfg = DeckConfig::freeform();
        let fp = Footprint::rectangle(2.0, 2.0, Point2::new(-2.0, -1.0));
        let s = SectionLayout::compute(&fp, &cfg, SectionOptions::default());
        assert!(approx(s.origin.y, 0.315));
        assert_eq!(s.origin.x, -2.0);

        let c = s.board_center(&s.surface.boards()[0]);
        assert_eq!(c.x, -2.0);
        assert!(c.z < -1.0);

        let leg = s.legs[0];
        assert!(approx(leg.position.x, -2.8));
        assert!(approx(leg.position.z, -1.8));
        assert!(approx(leg.position.y, 0.015 - 0.25));
    }

    // ── layout_sections ─────────────────────────────────────────────────

    #[test]
    fn empty_sketch_yields_placeholder() {
        let layout =
            layout_sections(&[], &DeckConfig::freeform(), SectionOptions::default()).unwrap();
        assert!(layout.is_placeholder());
        assert!(layout.sections().is_empty());
        let FreeformLayout::Placeholder(p) = layout else {
            panic!("expected placeholder");
        };
        assert_eq!(p.size, 0.5);
        assert_eq!(p.center, Vec3::new(0.0, 0.15, 0.0));
    }

    #[test]
    fn sections_follow_sketch_order() {
        let fps = [square(2.0), Footprint::circle(1.0, Point2::ORIGIN), square(1.0)];
        let layout =
            layout_sections(&fps, &DeckConfig::freeform(), SectionOptions::default()).unwrap();
        let sections = layout.sections();
        assert_eq!(sections.len(), 3);
        assert!(sections[1].footprint.is_circle());
        assert_eq!(
            layout.board_count(),
            sections[0].surface.boards().len() + sections[2].surface.boards().len()
        );
    }

    #[test]
    fn input_drops_non_deck_shapes() {
        let input = FreeformInput::new(alloc::vec![RawShape::new(
            crate::footprint::ShapeKind::Other,
            0.0,
            0.0,
            100.0,
            100.0
        )]);
        assert!(input.compute(&DeckConfig::freeform()).unwrap().is_placeholder());
    }

    // ── Error cases ─────────────────────────────────────────────────────

    #[test]
    fn frame_wider_than_footprint_leaves_no_boards() {
        // 0.5 wide with 0.3 strips: inner width is negative, inner depth is not.
        let cfg = DeckConfig::freeform().board_width(0.3);
        assert_eq!(cfg.validate(), Ok(()));
        let fp = Footprint::rectangle(0.5, 3.0, Point2::ORIGIN);
        let s = SectionLayout::compute(&fp, &cfg, framed());
        let Surface::Boards {
            boards,
            run,
            inner_width,
            ..
        } = &s.surface
        else {
            panic!("expected boards");
        };
        assert!(*inner_width < 0.0);
        assert!(boards.is_empty());
        assert!(run.is_empty());
        assert!(approx(run.span, 2.4));
        assert!(s.surface.frame().is_some());
        assert_eq!(s.legs.len(), 4);
    }

    #[test]
    fn frame_side_pieces_never_go_negative() {
        let border = FrameBorder::new(3.0, 0.5, 0.3);
        assert_eq!(border.piece(Side::Left).depth, 0.0);
        assert_eq!(border.piece(Side::Right).depth, 0.0);
        assert_eq!(border.piece(Side::Top).width, 3.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let input = FreeformInput::new(alloc::vec![RawShape::rect(300.0, 200.0, 200.0, 200.0)]);
        assert_eq!(
            input.compute(&DeckConfig::freeform().board_width(f64::NAN)),
            Err(LayoutError::NonFiniteValue)
        );
        assert_eq!(
            input.compute(&DeckConfig::freeform().board_width(-0.1)),
            Err(LayoutError::InvalidConfig)
        );
        assert_eq!(
            layout_sections(&[], &DeckConfig::freeform().board_gap(-1.0), framed()),
            Err(LayoutError::InvalidConfig)
        );
    }
}
