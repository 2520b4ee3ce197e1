//! Deterministic grid placement.

use super::geometry::{Bounds, Placement};
use crate::config::LayoutConfig;

/// Number of columns that fit in `width`:
/// `max(1, floor((width + gap) / (card_width + gap)))`.
pub fn grid_columns(width: f64, config: &LayoutConfig) -> usize {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    let columns = ((width + config.gap) / (config.card_width + config.gap)).floor();
    if columns.is_finite() && columns >= 1.0 {
        columns as usize
    } else {
        1
    }
}

/// Placement of the `index`-th card. The column block is centred
/// horizontally and rows start below the reserved top strip.
pub fn grid_placement(index: usize, bounds: Bounds, config: &LayoutConfig) -> Placement {
    let columns = grid_columns(bounds.width, config);
    let col = index % columns;
    let row = index / columns;

    let used = columns as f64 * config.card_width + (columns - 1) as f64 * config.gap;
    let left = ((bounds.width - used) / 2.0).max(0.0);

    Placement::new(
        left + col as f64 * (config.card_width + config.gap),
        config.reserved_top + row as f64 * (config.card_height + config.gap),
        0.0,
    )
}

/// Height needed to show `count` cards in the grid, bottom gap included.
pub fn grid_content_height(count: usize, bounds: Bounds, config: &LayoutConfig) -> f64 {
    let columns = grid_columns(bounds.width, config);
    let rows = count.div_ceil(columns);
    config.reserved_top + rows as f64 * (config.card_height + config.gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            card_width: 300.0,
            card_height: 400.0,
            gap: 20.0,
            reserved_top: 0.0,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn test_columns() {
        let c = config();
        assert_eq!(grid_columns(0.0, &c), 1);
        assert_eq!(grid_columns(299.0, &c), 1);
        assert_eq!(grid_columns(620.0, &c), 2);
        assert_eq!(grid_columns(639.0, &c), 2);
        assert_eq!(grid_columns(940.0, &c), 3);
        assert_eq!(grid_columns(1280.0, &c), 4);
    }

    #[test]
    fn test_columns_degenerate_width() {
        assert_eq!(grid_columns(f64::INFINITY, &config()), 1);
        assert_eq!(grid_columns(-500.0, &config()), 1);
    }

    #[test]
    fn test_placement_rows_and_columns() {
        let c = config();
        let bounds = Bounds::new(620.0, 800.0);

        assert_eq!(grid_placement(0, bounds, &c), Placement::new(0.0, 0.0, 0.0));
        assert_eq!(grid_placement(1, bounds, &c), Placement::new(320.0, 0.0, 0.0));
        assert_eq!(grid_placement(2, bounds, &c), Placement::new(0.0, 420.0, 0.0));
    }

    #[test]
    fn test_placement_centred() {
        let c = config();
        // 2 columns use 620px, 80px spare -> 40px each side
        let p = grid_placement(0, Bounds::new(700.0, 800.0), &c);
        assert_eq!(p.x, 40.0);
    }

    #[test]
    fn test_placement_starts_below_reserved_strip() {
        let c = LayoutConfig {
            reserved_top: 96.0,
            ..config()
        };
        assert_eq!(grid_placement(0, Bounds::new(300.0, 800.0), &c).y, 96.0);
    }

    #[test]
    fn test_content_height() {
        let c = config();
        let bounds = Bounds::new(620.0, 800.0);
        assert_eq!(grid_content_height(0, bounds, &c), 0.0);
        assert_eq!(grid_content_height(3, bounds, &c), 840.0);
    }
}
