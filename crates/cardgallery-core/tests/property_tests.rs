//! Property-based tests for layout and filtering
//!
//! Uses proptest to verify the invariants of the grid, the interactive board
//! and the derived filtered list.

use std::time::{Duration, Instant};

use cardgallery_core::filter::{self, ActiveFilters, FilterMode};
use cardgallery_core::layout::{fits, grid_columns, grid_placement};
use cardgallery_core::{
    Bounds, Card, CardId, GestureOutcome, LayoutConfig, LayoutEngine, Point, ViewMode,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

const TAGS: [&str; 6] = ["Grumpy", "Kind", "City", "Space", "Leader", "Striker"];

fn layout_config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (40.0..400.0f64, 40.0..500.0f64, 0.0..60.0f64, 0.0..150.0f64).prop_map(
        |(card_width, card_height, gap, reserved_top)| LayoutConfig {
            card_width,
            card_height,
            gap,
            reserved_top,
            ..LayoutConfig::default()
        },
    )
}

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (0.0..3000.0f64, 0.0..3000.0f64).prop_map(|(w, h)| Bounds::new(w, h))
}

fn tag_set_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(TAGS.to_vec()), 0..4)
        .prop_map(|tags| tags.into_iter().map(String::from).collect())
}

fn deck_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(tag_set_strategy(), 0..30).prop_map(|tag_sets| {
        tag_sets
            .into_iter()
            .enumerate()
            .map(|(i, tags)| {
                Card::new(CardId(i as u32), format!("card-{i}"), "", "", "").with_tags(tags)
            })
            .collect()
    })
}

fn ids(n: usize) -> Vec<CardId> {
    (0..n as u32).map(CardId).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Column count follows max(1, floor((w + gap) / (card_w + gap)))
    #[test]
    fn grid_column_formula(config in layout_config_strategy(), width in 0.0..5000.0f64) {
        let expected = ((width + config.gap) / (config.card_width + config.gap)).floor().max(1.0) as usize;
        prop_assert_eq!(grid_columns(width, &config), expected);
    }

    /// No grid card starts beyond the container's right edge
    #[test]
    fn grid_x_within_width(
        config in layout_config_strategy(),
        bounds in bounds_strategy(),
        index in 0usize..200,
    ) {
        let p = grid_placement(index, bounds, &config);
        prop_assert!(p.x >= 0.0);
        prop_assert!(p.x <= bounds.width, "x {} beyond width {}", p.x, bounds.width);
        prop_assert_eq!(p.rotation, 0.0);
    }

    /// Grid placement is a pure function of (index, bounds)
    #[test]
    fn grid_is_deterministic(
        config in layout_config_strategy(),
        bounds in bounds_strategy(),
        index in 0usize..200,
    ) {
        prop_assert_eq!(
            grid_placement(index, bounds, &config),
            grid_placement(index, bounds, &config)
        );
    }

    /// Two engines with different seeds agree on the grid
    #[test]
    fn grid_engine_ignores_seed(bounds in bounds_strategy(), n in 0usize..40, a: u64, b: u64) {
        let mut left = LayoutEngine::new(LayoutConfig::default(), a);
        let mut right = LayoutEngine::new(LayoutConfig::default(), b);
        for engine in [&mut left, &mut right] {
            engine.resize(bounds);
            engine.set_mode(ViewMode::Grid, &ids(n));
        }
        prop_assert_eq!(left.placements(), right.placements());
    }

    /// After a resize every interactive card sits inside the new bounds and
    /// equals its old spot clamped, not a fresh random one
    #[test]
    fn interactive_resize_clamps(
        seed: u64,
        n in 1usize..40,
        start in bounds_strategy(),
        next in bounds_strategy(),
    ) {
        let config = LayoutConfig::default();
        let mut engine = LayoutEngine::new(config.clone(), seed);
        engine.resize(Bounds::new(start.width.max(1.0), start.height.max(1.0)));
        engine.set_mode(ViewMode::Interactive, &ids(n));
        let before = engine.placements();

        engine.resize(next);
        if next.is_empty() {
            // a collapsed board keeps its cards; the next real size clamps them
            prop_assert_eq!(engine.placements(), before.clone());
            let restored = Bounds::new(start.width.max(1.0), start.height.max(1.0));
            engine.resize(restored);
            for ((_, old), (_, new)) in before.iter().zip(engine.placements()) {
                prop_assert_eq!(old.rotation, new.rotation);
                prop_assert_eq!(cardgallery_core::layout::clamp(*old, restored, &config), new);
            }
            return Ok(());
        }
        for ((_, old), (_, new)) in before.iter().zip(engine.placements()) {
            prop_assert!(fits(&new, next, &config));
            prop_assert_eq!(cardgallery_core::layout::clamp(*old, next, &config), new);
        }
    }

    /// A short, still press selects the card and leaves it where it was
    #[test]
    fn small_quick_gesture_is_click(
        seed: u64,
        dx in -3.0..3.0f64,
        dy in -3.0..3.0f64,
        held_ms in 0u64..199,
    ) {
        let mut engine = LayoutEngine::new(LayoutConfig::default(), seed);
        engine.resize(Bounds::new(1400.0, 900.0));
        engine.set_mode(ViewMode::Interactive, &ids(3));
        let card = CardId(1);
        let before = engine.placement(card).unwrap();

        let t0 = Instant::now();
        let press = Point::new(before.x + 20.0, before.y + 20.0);
        let release = Point::new(press.x + dx, press.y + dy);
        engine.pointer_down(card, press, t0);
        engine.pointer_move(release);
        let outcome = engine.pointer_up(release, t0 + Duration::from_millis(held_ms));

        prop_assert_eq!(outcome, GestureOutcome::Clicked(card));
        prop_assert_eq!(engine.placement(card), Some(before));
    }

    /// Dragged cards never leave the board interior
    #[test]
    fn drag_stays_inside(seed: u64, tx in -2000.0..4000.0f64, ty in -2000.0..4000.0f64) {
        let config = LayoutConfig::default();
        let bounds = Bounds::new(1200.0, 800.0);
        let mut engine = LayoutEngine::new(config.clone(), seed);
        engine.resize(bounds);
        engine.set_mode(ViewMode::Interactive, &ids(2));

        let origin = engine.placement(CardId(0)).unwrap().origin();
        engine.pointer_down(CardId(0), origin, Instant::now());
        engine.pointer_move(Point::new(tx, ty));
        engine.pointer_up(Point::new(tx, ty), Instant::now());

        prop_assert!(fits(&engine.placement(CardId(0)).unwrap(), bounds, &config));
    }

    /// Toggling the same tag twice gives back the original list
    #[test]
    fn toggle_twice_round_trips(deck in deck_strategy(), start in tag_set_strategy(), tag in prop::sample::select(TAGS.to_vec())) {
        let mut filters = ActiveFilters::from_tags(start);
        let before = filter::apply(&deck, &filters, FilterMode::All);

        filters.toggle(tag);
        filters.toggle(tag);

        prop_assert_eq!(filter::apply(&deck, &filters, FilterMode::All), before);
    }

    /// No filters -> everything; filters -> exactly the cards whose tags are a
    /// superset of the filters, in collection order
    #[test]
    fn all_mode_is_superset_match(deck in deck_strategy(), active in tag_set_strategy()) {
        let filters = ActiveFilters::from_tags(active.clone());
        let filtered = filter::apply(&deck, &filters, FilterMode::All);

        if active.is_empty() {
            prop_assert_eq!(filtered, deck);
        } else {
            let expected: Vec<Card> = deck
                .iter()
                .filter(|c| active.iter().all(|t| c.feature_tags.contains(t)))
                .cloned()
                .collect();
            prop_assert_eq!(filtered, expected);
        }
    }
}
