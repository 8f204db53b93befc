//! Deck board layout computation for rectangular decks and freeform sketched sections.
//!
//! Pure geometry — no rendering, no I/O, `no_std` compatible (needs `alloc`).
//! Layouts are recomputed wholesale from their inputs; [`LayoutCache`] keeps
//! the last result so unrelated state changes don't trigger recomputation.
//!
//! # Modules
//!
//! - [`config`] — Physical constants ([`DeckConfig`]) and boundary validation
//! - [`tiling`] — Board runs: count, spacing and offsets along a tiling axis
//! - [`deck`] — Fixed rectangular deck with an orientation flag
//! - [`footprint`] — Raw sketch shapes → footprints in scene coordinates
//! - [`section`] — Freeform sections with picture frame and breaker board
//! - [`scene`] — Flat primitive list for direct instancing by a renderer
//! - [`cache`] — Single-entry memoization keyed on the full input
//!
//! # Example
//!
//! ```
//! use decklayout::{DeckConfig, Orientation, RectDeck};
//!
//! let layout = RectDeck::new(4.0, 6.0, Orientation::AlongWidth)
//!     .compute(&DeckConfig::rectangular())
//!     .unwrap();
//!
//! // 6 m tiled with 0.14 m boards and 0.01 m gaps
//! assert_eq!(layout.boards.len(), 40);
//! assert!((layout.spacing - 0.15).abs() < 1e-9);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cache;
pub mod config;
pub mod deck;
pub mod footprint;
pub mod geometry;
pub mod scene;
pub mod section;
#[cfg(feature = "svg")]
pub mod svg;
pub mod tiling;

// Re-exports: the types most callers need
pub use cache::{CacheStats, DeckCache, FreeformCache, LayoutCache};
pub use config::{DeckConfig, LayoutError};
pub use deck::{DeckLayout, FrameRail, Orientation, RectDeck};
pub use footprint::{Footprint, FootprintKind, RawShape, ShapeKind, derive_footprints};
pub use geometry::{Point2, Side, Vec3};
pub use scene::{Material, Primitive, Scene};
pub use section::{
    FrameBorder, FramePiece, FreeformInput, FreeformLayout, Placeholder, SectionLayout,
    SectionOptions, Surface, layout_sections,
};
pub use tiling::{Board, BoardRole, BoardRun, Leg, MAX_BOARDS};
