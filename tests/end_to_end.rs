//! End-to-end layouts through the public API.
//!
//! Each test starts from the inputs a UI would hand over (deck dimensions or
//! raw sketch objects) and checks the final boards, frame, legs and scene.

use decklayout::*;

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

// ============================================================
// Rectangular deck
// ============================================================

mod rectangular {
    use super::*;

    #[test]
    fn four_by_six_along_width() {
        let layout = RectDeck::new(4.0, 6.0, Orientation::AlongWidth)
            .compute(&DeckConfig::rectangular())
            .unwrap();

        assert_eq!(layout.boards.len(), 40);
        assert_close(layout.spacing, 0.15);
        assert_close(layout.boards[0].offset, -2.925);
        assert_close(layout.boards[39].offset, 2.925);
        for pair in layout.boards.windows(2) {
            assert_close(pair[1].offset - pair[0].offset, 0.15);
        }
        assert!(
            layout
                .boards
                .iter()
                .all(|b| b.width == 4.0 && b.depth == 0.14 && b.role == BoardRole::Normal)
        );
    }

    #[test]
    fn default_ui_deck_along_length() {
        // The UI starts at 4 × 6 with boards along the long side.
        let layout = RectDeck::new(4.0, 6.0, Orientation::AlongLength)
            .compute(&DeckConfig::rectangular())
            .unwrap();
        assert_eq!(layout.boards.len(), 26);
        assert_close(layout.covered_span(), 4.0);
        assert_close(layout.boards[0].offset + layout.boards[25].offset, 0.0);
    }

    #[test]
    fn slider_range_always_has_boards() {
        // Width and length sliders run 2..=8 in 0.5 steps.
        let cfg = DeckConfig::rectangular();
        for w in (4..=16).map(|i| i as f64 * 0.5) {
            for l in (4..=16).map(|i| i as f64 * 0.5) {
                for o in [Orientation::AlongWidth, Orientation::AlongLength] {
                    let deck = RectDeck::new(w, l, o);
                    let layout = deck.compute(&cfg).unwrap();
                    assert!(!layout.boards.is_empty(), "{w}×{l} {o:?}");
                    assert_close(layout.covered_span(), deck.tiling_dimension());
                }
            }
        }
    }

    #[test]
    fn custom_board_dimensions() {
        let cfg = DeckConfig::rectangular().board_width(0.09).board_gap(0.005);
        let layout = RectDeck::new(3.0, 1.9, Orientation::AlongWidth)
            .compute(&cfg)
            .unwrap();
        // 1.9 / 0.095 = 20 exactly
        assert_eq!(layout.boards.len(), 20);
        assert_close(layout.spacing, 0.095);
    }

    #[test]
    fn scene_has_boards_rails_legs() {
        let layout = RectDeck::new(2.0, 2.0, Orientation::AlongWidth)
            .compute(&DeckConfig::rectangular())
            .unwrap();
        let scene = Scene::from(&layout);
        assert_eq!(scene.count(Material::Board), 13);
        assert_eq!(scene.count(Material::Frame), 4);
        assert_eq!(scene.count(Material::Leg), 4);
    }
}

// ============================================================
// Freeform sketch
// ============================================================

mod freeform {
    use super::*;

    /// A 200×200 px rect is a 2×2 m section.
    fn two_meter_square() -> RawShape {
        RawShape::rect(300.0, 200.0, 200.0, 200.0)
    }

    #[test]
    fn framed_square_with_breaker() {
        let layout = FreeformInput::new(vec![two_meter_square()])
            .picture_frame(true)
            .breaker_placement(true)
            .compute(&DeckConfig::freeform())
            .unwrap();

        let section = &layout.sections()[0];
        let Surface::Boards {
            boards,
            frame,
            run,
            inner_width,
        } = &section.surface
        else {
            panic!("expected a tiled section");
        };

        assert_close(run.span, 1.724);
        assert_close(*inner_width, 1.724);
        assert_eq!(boards.len(), 11);
        let breakers: Vec<usize> = boards
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_breaker())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(breakers, vec![5]);
        assert!(frame.is_some());
    }

    #[test]
    fn breaker_off_leaves_all_normal() {
        let layout = FreeformInput::new(vec![two_meter_square()])
            .picture_frame(true)
            .compute(&DeckConfig::freeform())
            .unwrap();
        assert!(
            layout.sections()[0]
                .surface
                .boards()
                .iter()
                .all(|b| b.role == BoardRole::Normal)
        );
    }

    #[test]
    fn default_tool_shapes() {
        // The sketch tool's stock rectangle (150×100 at 200,200) and
        // circle (r=75 at 200,200), plus a line that must be ignored.
        let shapes = vec![
            RawShape::rect(200.0, 200.0, 150.0, 100.0),
            RawShape::circle(200.0, 200.0, 75.0),
            RawShape::new(ShapeKind::Other, 100.0, 100.0, 200.0, 0.0),
        ];
        let layout = FreeformInput::new(shapes)
            .compute(&DeckConfig::freeform())
            .unwrap();
        let sections = layout.sections();
        assert_eq!(sections.len(), 2);

        let rect = &sections[0];
        assert_close(rect.footprint.width, 1.5);
        assert_close(rect.footprint.depth, 1.0);
        assert_eq!(rect.footprint.center, Point2::new(-2.0, -1.0));
        // 1.0 / 0.144 = 6.94
        assert_eq!(rect.surface.boards().len(), 6);

        let circle = &sections[1];
        assert_eq!(circle.surface, Surface::Disc { radius: 0.75 });
    }

    #[test]
    fn degenerate_shape_still_renders() {
        let layout = FreeformInput::new(vec![RawShape::rect(400.0, 300.0, 0.0, 0.0)])
            .compute(&DeckConfig::freeform())
            .unwrap();
        let section = &layout.sections()[0];
        assert_eq!(section.footprint.width, 0.5);
        assert_eq!(section.footprint.depth, 0.5);
        // 0.5 / 0.144 = 3.47
        assert_eq!(section.surface.boards().len(), 3);
        assert_eq!(section.legs.len(), 4);
    }

    #[test]
    fn empty_sketch_placeholder_scene() {
        let layout = FreeformInput::default()
            .compute(&DeckConfig::freeform())
            .unwrap();
        assert!(layout.is_placeholder());
        let scene = Scene::from(&layout);
        assert_eq!(scene.primitives.len(), 1);
        assert_eq!(scene.primitives[0].material(), Material::Placeholder);
    }

    #[test]
    fn multi_section_scene() {
        let shapes = vec![
            two_meter_square(),
            RawShape::rect(600.0, 300.0, 100.0, 300.0),
            RawShape::circle(500.0, 500.0, 60.0),
        ];
        let layout = FreeformInput::new(shapes)
            .picture_frame(true)
            .compute(&DeckConfig::freeform())
            .unwrap();
        let scene = Scene::from(&layout);

        // 12 legs, 8 frame strips, one disc
        assert_eq!(scene.count(Material::Leg), 12);
        assert_eq!(scene.count(Material::Frame), 8);
        let discs = scene
            .primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Cylinder { material: Material::Board, .. }))
            .count();
        assert_eq!(discs, 1);
        assert_eq!(
            scene.count(Material::Board),
            layout.board_count() + discs
        );
    }

    #[test]
    fn cache_ignores_render_only_changes() {
        // Colors live in the renderer; recomputing for the same sketch hits.
        let mut cache = FreeformCache::new();
        let key = (
            FreeformInput::new(vec![two_meter_square()]).picture_frame(true),
            DeckConfig::freeform(),
        );
        for _ in 0..5 {
            cache
                .try_get_or_compute(key.clone(), |(input, config)| input.compute(config))
                .unwrap();
        }
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 4);
    }
}
