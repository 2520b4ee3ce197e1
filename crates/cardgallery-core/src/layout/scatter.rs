//! Random placement for the interactive board.

use rand::Rng;

use super::geometry::{Bounds, Placement};
use crate::config::LayoutConfig;

/// A random spot inside the board interior (below the reserved strip) with a
/// random tilt in `[-max_rotation_deg, max_rotation_deg]`.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: Bounds,
    config: &LayoutConfig,
) -> Placement {
    let max_x = (bounds.width - config.card_width).max(0.0);
    let min_y = config.reserved_top;
    let max_y = (bounds.height - config.card_height).max(min_y);
    let max_rot = config.max_rotation_deg;

    let x = if max_x > 0.0 {
        rng.random_range(0.0..=max_x)
    } else {
        0.0
    };
    let y = if max_y > min_y {
        rng.random_range(min_y..=max_y)
    } else {
        min_y
    };
    let rotation = if max_rot > 0.0 {
        rng.random_range(-max_rot..=max_rot)
    } else {
        0.0
    };

    Placement::new(x, y, rotation)
}
