//! Board geometry: points, bounds, placements and clamping.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// A position in board coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Component-wise `self - other`
    pub fn offset_from(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Board size. Negative or non-finite input collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        let sane = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            width: sane(width),
            height: sane(height),
        }
    }

    /// Not measured yet, or measured as nothing
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Where a card sits: top-left corner plus tilt in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Placement {
    pub const fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// CSS transform placing the card on the board
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.2}deg)",
            self.x, self.y, self.rotation
        )
    }
}

fn x_range(bounds: Bounds, config: &LayoutConfig) -> (f64, f64) {
    (0.0, (bounds.width - config.card_width).max(0.0))
}

fn y_range(bounds: Bounds, config: &LayoutConfig) -> (f64, f64) {
    let min = config.reserved_top;
    (min, (bounds.height - config.card_height).max(min))
}

/// Pull a card's top-left corner inside the board interior, below the
/// reserved top strip. When the board is smaller than a card the card pins to
/// the top-left of the usable area.
pub fn clamp_point(point: Point, bounds: Bounds, config: &LayoutConfig) -> Point {
    let (min_x, max_x) = x_range(bounds, config);
    let (min_y, max_y) = y_range(bounds, config);
    Point::new(point.x.clamp(min_x, max_x), point.y.clamp(min_y, max_y))
}

/// [`clamp_point`] for a placement; rotation is kept.
pub fn clamp(placement: Placement, bounds: Bounds, config: &LayoutConfig) -> Placement {
    let p = clamp_point(placement.origin(), bounds, config);
    Placement::new(p.x, p.y, placement.rotation)
}

/// Is the placement already inside the clamped region?
pub fn fits(placement: &Placement, bounds: Bounds, config: &LayoutConfig) -> bool {
    let (min_x, max_x) = x_range(bounds, config);
    let (min_y, max_y) = y_range(bounds, config);
    (min_x..=max_x).contains(&placement.x) && (min_y..=max_y).contains(&placement.y)
}
