//! Flat primitive list for direct instancing by a renderer.
//!
//! Both layout strategies flatten to the same shape: boxes and cylinders in
//! scene coordinates, each tagged with the material slot it is drawn with.
//! The renderer maps [`Material`] to actual colors; board and frame colors
//! are therefore not part of any layout input.

use alloc::vec::Vec;

use crate::deck::DeckLayout;
use crate::geometry::Vec3;
use crate::section::{FreeformLayout, SectionLayout, Surface};
use crate::tiling::{Board, BoardRole, Leg};

/// Material slot of a primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Material {
    /// Deck boards and circular discs.
    Board,
    /// Frame rails, picture-frame strips and breaker boards.
    Frame,
    /// Support legs.
    Leg,
    /// The stand-in block for an empty sketch.
    Placeholder,
}

impl From<BoardRole> for Material {
    fn from(role: BoardRole) -> Self {
        match role {
            BoardRole::Normal => Self::Board,
            BoardRole::Breaker => Self::Frame,
        }
    }
}

/// One drawable solid.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    /// Box with the given extents, rotated about Y by `yaw` radians before
    /// being moved to `center`.
    Box {
        center: Vec3,
        size: Vec3,
        yaw: f64,
        material: Material,
    },
    /// Upright (Y-axis) cylinder or truncated cone.
    Cylinder {
        center: Vec3,
        radius_top: f64,
        radius_bottom: f64,
        height: f64,
        material: Material,
    },
}

impl Primitive {
    pub fn material(&self) -> Material {
        match self {
            Self::Box { material, .. } | Self::Cylinder { material, .. } => *material,
        }
    }

    pub fn center(&self) -> Vec3 {
        match self {
            Self::Box { center, .. } | Self::Cylinder { center, .. } => *center,
        }
    }
}

/// Everything a renderer needs to draw one deck.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Number of primitives drawn with `material`.
    pub fn count(&self, material: Material) -> usize {
        self.primitives
            .iter()
            .filter(|p| p.material() == material)
            .count()
    }

    fn push_leg(&mut self, leg: &Leg) {
        self.primitives.push(Primitive::Cylinder {
            center: leg.position,
            radius_top: leg.radius_top,
            radius_bottom: leg.radius_bottom,
            height: leg.height,
            material: Material::Leg,
        });
    }

    fn push_section(&mut self, section: &SectionLayout) {
        let t = section.board_thickness;
        match &section.surface {
            Surface::Boards { boards, frame, .. } => {
                for board in boards {
                    self.primitives.push(section_board(section, board));
                }
                for piece in frame.iter().flat_map(|f| f.pieces.iter()) {
                    self.primitives.push(Primitive::Box {
                        center: section.frame_center(piece),
                        size: Vec3::new(piece.width, t, piece.depth),
                        yaw: 0.0,
                        material: Material::Frame,
                    });
                }
            }
            Surface::Disc { radius } => {
                self.primitives.push(Primitive::Cylinder {
                    center: section.origin,
                    radius_top: *radius,
                    radius_bottom: *radius,
                    height: t,
                    material: Material::Board,
                });
            }
        }
        for leg in &section.legs {
            self.push_leg(leg);
        }
    }
}

fn section_board(section: &SectionLayout, board: &Board) -> Primitive {
    Primitive::Box {
        center: section.board_center(board),
        size: Vec3::new(board.width, section.board_thickness, board.depth),
        yaw: 0.0,
        material: board.role.into(),
    }
}

impl From<&DeckLayout> for Scene {
    fn from(layout: &DeckLayout) -> Self {
        let mut scene = Scene::default();
        let yaw = layout.board_yaw();
        for board in &layout.boards {
            // Local extents; `yaw` turns the long axis into place.
            scene.primitives.push(Primitive::Box {
                center: layout.board_center(board),
                size: Vec3::new(board.width, layout.board_thickness, board.depth),
                yaw,
                material: board.role.into(),
            });
        }
        for rail in &layout.rails {
            scene.primitives.push(Primitive::Box {
                center: rail.center,
                size: rail.size,
                yaw: 0.0,
                material: Material::Frame,
            });
        }
        for leg in &layout.legs {
            scene.push_leg(leg);
        }
        scene
    }
}

impl From<&FreeformLayout> for Scene {
    fn from(layout: &FreeformLayout) -> Self {
        let mut scene = Scene::default();
        match layout {
            FreeformLayout::Placeholder(p) => scene.primitives.push(Primitive::Box {
                center: p.center,
                size: Vec3::new(p.size, p.size, p.size),
                yaw: 0.0,
                material: Material::Placeholder,
            }),
            FreeformLayout::Sections(sections) => {
                for section in sections {
                    scene.push_section(section);
                }
            }
        }
        scene
    }
}
