//! Chart geometry for the dashboard: bar lengths and pie slices.
//!
//! Rendering lives in the app; this module only does the arithmetic so it
//! can be tested without a UI.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::analytics::TagCount;

/// Slice colors, cycled
pub const PIE_PALETTE: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D",
];

pub fn palette_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

/// One horizontal bar
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub count: usize,
    /// Length relative to the longest bar, 0.0..=1.0
    pub fraction: f64,
}

impl Bar {
    pub fn width_percent(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Scale counts against the largest one.
pub fn bar_fractions(counts: &[TagCount]) -> Vec<Bar> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    counts
        .iter()
        .map(|c| Bar {
            label: c.tag.clone(),
            count: c.count,
            fraction: if max == 0 {
                0.0
            } else {
                c.count as f64 / max as f64
            },
        })
        .collect()
}

/// One pie slice. Angles are radians, measured clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn fraction(&self) -> f64 {
        self.sweep() / TAU
    }

    /// SVG path data for the slice centred on (cx, cy).
    pub fn svg_path(&self, cx: f64, cy: f64, r: f64) -> String {
        let point = |angle: f64| {
            // 0 rad points up; SVG's y axis points down
            let a = angle - FRAC_PI_2;
            (cx + r * a.cos(), cy + r * a.sin())
        };

        if self.sweep() >= TAU - 1e-9 {
            // A full circle cannot be one arc
            let (x0, y0) = point(0.0);
            let (x1, y1) = point(std::f64::consts::PI);
            return format!(
                "M {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 1 1 {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 1 1 {x0:.3} {y0:.3} Z"
            );
        }

        let (x0, y0) = point(self.start_angle);
        let (x1, y1) = point(self.end_angle);
        let large = if self.sweep() > std::f64::consts::PI { 1 } else { 0 };
        format!(
            "M {cx:.3} {cy:.3} L {x0:.3} {y0:.3} A {r:.3} {r:.3} 0 {large} 1 {x1:.3} {y1:.3} Z"
        )
    }

    /// Point halfway along the arc at `r`, for labels
    pub fn label_anchor(&self, cx: f64, cy: f64, r: f64) -> (f64, f64) {
        let mid = (self.start_angle + self.end_angle) / 2.0 - FRAC_PI_2;
        (cx + r * mid.cos(), cy + r * mid.sin())
    }
}

/// Split a full turn proportionally to `counts`. Zero counts get no slice;
/// an all-zero input yields no slices.
pub fn pie_slices(counts: &[TagCount]) -> Vec<PieSlice> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    counts
        .iter()
        .filter(|c| c.count > 0)
        .enumerate()
        .map(|(idx, c)| {
            let sweep = TAU * c.count as f64 / total as f64;
            let slice = PieSlice {
                label: c.tag.clone(),
                value: c.count,
                start_angle: angle,
                end_angle: angle + sweep,
                color: palette_color(idx),
            };
            angle += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[(&str, usize)]) -> Vec<TagCount> {
        values.iter().map(|(t, c)| TagCount::new(*t, *c)).collect()
    }

    #[test]
    fn test_bar_fractions() {
        let bars = bar_fractions(&counts(&[("a", 4), ("b", 1), ("c", 0)]));
        assert_eq!(bars[0].fraction, 1.0);
        assert_eq!(bars[1].width_percent(), 25.0);
        assert_eq!(bars[2].fraction, 0.0);
    }

    #[test]
    fn test_bar_fractions_all_zero() {
        let bars = bar_fractions(&counts(&[("a", 0)]));
        assert_eq!(bars[0].fraction, 0.0);
    }

    #[test]
    fn test_pie_slices_cover_full_turn() {
        let slices = pie_slices(&counts(&[("a", 1), ("b", 0), ("c", 3)]));
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[1].end_angle - TAU).abs() < 1e-12);
        assert!((slices[1].fraction() - 0.75).abs() < 1e-12);
        assert_eq!(slices[0].color, PIE_PALETTE[0]);
        assert_eq!(slices[1].color, PIE_PALETTE[1]);
    }

    #[test]
    fn test_pie_slices_empty() {
        assert!(pie_slices(&counts(&[("a", 0)])).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn test_full_circle_path_uses_two_arcs() {
        let slices = pie_slices(&counts(&[("only", 2)]));
        let path = slices[0].svg_path(50.0, 50.0, 40.0);
        assert_eq!(path.matches(" A ").count(), 2);
    }

    #[test]
    fn test_quarter_slice_path() {
        let slices = pie_slices(&counts(&[("a", 1), ("b", 3)]));
        let path = slices[0].svg_path(0.0, 0.0, 10.0);
        assert!(path.starts_with("M 0.000 0.000 L 0.000 -10.000"));
        assert!(path.contains("0 0 1 10.000 0.000"));
    }

    #[test]
    fn test_label_anchor_sits_mid_slice() {
        let slices = pie_slices(&counts(&[("a", 1), ("b", 3)]));
        // First quarter spans 12 to 3 o'clock; its middle is up and right
        let (x, y) = slices[0].label_anchor(0.0, 0.0, 10.0);
        let half = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((x - half).abs() < 1e-9);
        assert!((y + half).abs() < 1e-9);
    }

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(6), PIE_PALETTE[0]);
    }
}
