//! Card board layout.
//!
//! The board shows the filtered cards either as a tidy grid or scattered
//! freely where each card can be dragged around.
//!
//! ## Modes
//!
//! - **Grid**: columns derived from the board width, fixed card size and gap.
//!   Placement is a pure function of (index, bounds) and is recomputed whenever
//!   the card set or the board size changes.
//! - **Interactive**: each card gets a random spot and tilt when it enters the
//!   board. Spots survive re-renders; on resize they are clamped back inside
//!   the board, never re-rolled.
//!
//! ## Pointer handling
//!
//! A press is tracked by an explicit [`Gesture`] value:
//!
//! ```text
//! Idle ──press──▶ Pressed ──travel ≥ threshold──▶ Dragging ──release──▶ Dragged
//!                    │
//!                    └──release──▶ Clicked (short and still) | Released (held too long)
//! ```

mod engine;
mod geometry;
mod gesture;
mod grid;
mod scatter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use engine::LayoutEngine;
pub use geometry::{clamp, clamp_point, fits, Bounds, Placement, Point};
pub use gesture::{Gesture, GestureOutcome};
pub use grid::{grid_columns, grid_content_height, grid_placement};
pub use scatter::random_placement;

/// How the board arranges its cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    Interactive,
}

impl ViewMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::Interactive,
            ViewMode::Interactive => ViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::Interactive => "Interactive",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "interactive" => Ok(ViewMode::Interactive),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::Interactive);
        assert_eq!(ViewMode::Interactive.toggled(), ViewMode::Grid);
        assert_eq!(ViewMode::default(), ViewMode::Grid);
    }

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("grid".parse::<ViewMode>().unwrap(), ViewMode::Grid);
        assert_eq!("Interactive".parse::<ViewMode>().unwrap(), ViewMode::Interactive);
        assert!("masonry".parse::<ViewMode>().is_err());
    }
}
