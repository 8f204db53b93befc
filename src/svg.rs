//! SVG plan view of deck layouts.
//!
//! Generates a vertical sequence of annotated panels, one per deck or
//! section, looking straight down on the boards (-Z at the top). Boards,
//! frame pieces, breaker boards and legs each get their own style class.
//!
//! # Example
//!
//! ```
//! use decklayout::{DeckConfig, Orientation, RectDeck, svg::render_deck_svg};
//!
//! let layout = RectDeck::new(4.0, 6.0, Orientation::AlongWidth)
//!     .compute(&DeckConfig::rectangular())
//!     .unwrap();
//!
//! let svg = render_deck_svg(&layout);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::deck::DeckLayout;
use crate::geometry::Point2;
use crate::section::{FreeformLayout, SectionLayout, Surface};
use crate::tiling::Board;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 40.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;
/// Drawn leg radius in pixels, independent of scale.
const LEG_R: f64 = 3.0;

/// A single panel: one deck or one section.
struct Panel {
    label: String,
    annotation: String,
    /// Plan extents in meters (X, Z).
    width: f64,
    depth: f64,
    /// Items positioned relative to the panel center, in meters.
    items: Vec<Item>,
}

enum Item {
    Rect {
        center: Point2,
        width: f64,
        depth: f64,
        class: &'static str,
    },
    Disc {
        center: Point2,
        radius: f64,
    },
    Leg(Point2),
}

/// Render a rectangular deck as a single plan-view panel.
pub fn render_deck_svg(layout: &DeckLayout) -> String {
    let deck = &layout.deck;
    let mut items: Vec<Item> = layout
        .rails
        .iter()
        .map(|r| Item::Rect {
            center: Point2::new(r.center.x, r.center.z),
            width: r.size.x,
            depth: r.size.z,
            class: "frame",
        })
        .collect();
    for board in &layout.boards {
        let c = layout.board_center(board);
        let e = layout.board_extents(board);
        items.push(Item::Rect {
            center: Point2::new(c.x, c.z),
            width: e.x,
            depth: e.z,
            class: board_class(board),
        });
    }
    items.extend(
        layout
            .legs
            .iter()
            .map(|l| Item::Leg(Point2::new(l.position.x, l.position.z))),
    );

    let panel = Panel {
        label: format!("Deck  {}×{} m", fmt_m(deck.width), fmt_m(deck.length)),
        annotation: format!(
            "{} boards, {:?}, spacing {} m",
            layout.boards.len(),
            deck.orientation,
            fmt_m(layout.spacing)
        ),
        width: deck.width,
        depth: deck.length,
        items,
    };
    render_panels(&[panel])
}

/// Render a freeform layout, one panel per section.
pub fn render_freeform_svg(layout: &FreeformLayout) -> String {
    let panels: Vec<Panel> = match layout {
        FreeformLayout::Placeholder(p) => alloc::vec![Panel {
            label: String::from("Empty sketch"),
            annotation: format!("placeholder {} m", fmt_m(p.size)),
            width: p.size,
            depth: p.size,
            items: alloc::vec![Item::Rect {
                center: Point2::ORIGIN,
                width: p.size,
                depth: p.size,
                class: "placeholder",
            }],
        }],
        FreeformLayout::Sections(sections) => sections
            .iter()
            .enumerate()
            .map(|(i, s)| section_panel(i, s))
            .collect(),
    };
    render_panels(&panels)
}

fn section_panel(index: usize, section: &SectionLayout) -> Panel {
    let fp = &section.footprint;
    let mut items = Vec::new();
    let annotation = match &section.surface {
        Surface::Boards { boards, frame, .. } => {
            for piece in frame.iter().flat_map(|f| f.pieces.iter()) {
                items.push(Item::Rect {
                    center: piece.center,
                    width: piece.width,
                    depth: piece.depth,
                    class: "frame",
                });
            }
            for board in boards {
                items.push(Item::Rect {
                    center: Point2::new(0.0, board.offset),
                    width: board.width,
                    depth: board.depth,
                    class: board_class(board),
                });
            }
            let mut text = format!("{} boards", boards.len());
            if frame.is_some() {
                text.push_str(", picture frame");
            }
            if boards.iter().any(Board::is_breaker) {
                text.push_str(", breaker");
            }
            text
        }
        Surface::Disc { radius } => {
            items.push(Item::Disc {
                center: Point2::ORIGIN,
                radius: *radius,
            });
            format!("disc r={} m", fmt_m(*radius))
        }
    };
    items.extend(section.legs.iter().map(|l| {
        Item::Leg(Point2::new(
            l.position.x - section.origin.x,
            l.position.z - section.origin.z,
        ))
    }));

    Panel {
        label: format!(
            "Section {}  {}×{} m at ({}, {})",
            index + 1,
            fmt_m(fp.width),
            fmt_m(fp.depth),
            fmt_m(fp.center.x),
            fmt_m(fp.center.z)
        ),
        annotation,
        width: fp.width,
        depth: fp.depth,
        items,
    }
}

fn board_class(board: &Board) -> &'static str {
    if board.is_breaker() { "breaker" } else { "board" }
}

/// Meters with at most three decimals, trailing zeros dropped.
fn fmt_m(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        String::from("0")
    } else {
        String::from(s)
    }
}

/// Scale plan extents to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(width: f64, depth: f64) -> (f64, f64, f64) {
    if width <= 0.0 || depth <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / width).min(MAX_PANEL_H / depth);
    (width * scale, depth * scale, scale)
}

/// Render panels into a complete SVG document.
fn render_panels(panels: &[Panel]) -> String {
    if panels.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    // Each panel is label + drawing + annotation line, separated by gaps.
    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H + 16.0) + (n - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style — light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .outline { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .board { fill: #b08968; stroke: #7f5f45; stroke-width: 0.5; }
  .breaker { fill: #ddb892; stroke: #8b7355; stroke-width: 0.5; }
  .frame { fill: #ddb892; stroke: #8b7355; stroke-width: 0.5; }
  .disc { fill: #b08968; stroke: #7f5f45; stroke-width: 1; }
  .leg { fill: #6b5d52; }
  .placeholder { fill: #555; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .outline { stroke: #555; }
    .board { fill: #4a5568; stroke: #2d3748; }
    .breaker { fill: #718096; stroke: #a0aec0; }
    .frame { fill: #718096; stroke: #a0aec0; }
    .disc { fill: #4a5568; stroke: #2d3748; }
    .leg { fill: #cbd5e0; }
    .placeholder { fill: #a0aec0; }
  }
</style>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for panel in panels {
        // Label
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = scale_to_fit(panel.width, panel.depth);
        let cx = center_x;
        let cy = y + ph / 2.0;

        // Footprint outline
        svg.push_str(&format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="outline"/>"#,
            cx - pw / 2.0,
            y,
            pw,
            ph
        ));
        svg.push('\n');

        for item in &panel.items {
            match item {
                Item::Rect {
                    center,
                    width,
                    depth,
                    class,
                } => {
                    let w = width * scale;
                    let h = depth * scale;
                    svg.push_str(&format!(
                        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" class="{}"/>"#,
                        cx + center.x * scale - w / 2.0,
                        cy + center.z * scale - h / 2.0,
                        w,
                        h,
                        class
                    ));
                }
                Item::Disc { center, radius } => {
                    svg.push_str(&format!(
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" class="disc"/>"#,
                        cx + center.x * scale,
                        cy + center.z * scale,
                        radius * scale
                    ));
                }
                Item::Leg(p) => {
                    svg.push_str(&format!(
                        r#"<circle cx="{:.2}" cy="{:.2}" r="{}" class="leg"/>"#,
                        cx + p.x * scale,
                        cy + p.z * scale,
                        LEG_R
                    ));
                }
            }
            svg.push('\n');
        }

        // Annotation
        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                y + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H + 16.0 + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
