//! Gallery context for the desktop app.
//!
//! The `GalleryState` lives in a signal provided by `App`; pages and
//! components reach it through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut gallery = use_gallery();
//!
//! // Read state
//! let shown = gallery.read().filtered_cards().len();
//!
//! // Mutate state
//! gallery.write().toggle_filter("Leader");
//! ```

use cardgallery_core::{GalleryConfig, GalleryState};
use dioxus::prelude::*;

pub use crate::Settings;

/// Get the startup settings (seed, initial view, config).
pub fn get_settings() -> Settings {
    crate::get_settings()
}

/// Get the gallery configuration.
pub fn get_config() -> GalleryConfig {
    crate::get_settings().config
}

/// Hook to access the gallery state from context.
///
/// Reading the signal subscribes the calling component, so it re-renders
/// when cards load, filters change or the view mode flips.
pub fn use_gallery() -> Signal<GalleryState> {
    use_context::<Signal<GalleryState>>()
}
