//! Card Gallery Core Library
//!
//! Everything behind the gallery that is not rendering: the card data model,
//! the tag taxonomy, filtering, application state, the card layout engine and
//! the dashboard analytics.
//!
//! ## Overview
//!
//! The gallery shows a collection of illustrated character cards. A viewer can
//! narrow the collection with feature tags, switch between a tidy grid and a
//! free-form board where cards can be dragged around, and open a dashboard
//! with tag usage statistics.
//!
//! ```text
//! catalog ──▶ GalleryState ──▶ LayoutEngine ──▶ (desktop board / CLI)
//!                  │
//!                  └──────────▶ analytics ──▶ dashboard charts
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardgallery_core::{catalog, GalleryState, LayoutEngine, Bounds};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let taxonomy = catalog::builtin_taxonomy();
//!     let cards = catalog::load_cards(
//!         catalog::builtin_cards(),
//!         &taxonomy,
//!         std::time::Duration::ZERO,
//!     )
//!     .await?;
//!
//!     let mut state = GalleryState::new(taxonomy);
//!     state.load_cards(cards);
//!     state.toggle_filter("Leader");
//!
//!     let mut engine = LayoutEngine::new(Default::default(), 7);
//!     engine.resize(Bounds::new(1280.0, 800.0));
//!     engine.sync(&state.filtered_ids());
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod catalog;
pub mod chart;
pub mod config;
pub mod cosmetics;
pub mod error;
pub mod filter;
pub mod layout;
pub mod selection;
pub mod state;
pub mod types;

// Re-exports
pub use analytics::{CategoryUsage, DashboardSummary, TagCount};
pub use config::{GalleryConfig, LayoutConfig, WindowConfig};
pub use cosmetics::Cosmetics;
pub use error::{GalleryError, GalleryResult};
pub use filter::{ActiveFilters, FilterMode, FilterPanel};
pub use layout::{
    Bounds, Gesture, GestureOutcome, LayoutEngine, Placement, Point, ViewMode,
};
pub use selection::{Selection, Step};
pub use state::GalleryState;
pub use types::*;
