//! View Toggle Component
//!
//! Switches the board between grid and interactive layouts. The label names
//! the mode the click leads to.

use cardgallery_core::ViewMode;
use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Text shown on the toggle while `current` is active
pub fn toggle_label(current: ViewMode) -> String {
    format!("Switch to {} View", current.toggled().label())
}

#[component]
pub fn ViewToggle(mode: ViewMode, on_toggle: EventHandler<ViewMode>) -> Element {
    let label = toggle_label(mode);

    rsx! {
        Button {
            variant: ButtonVariant::Primary,
            class: "view-toggle".to_string(),
            onclick: move |_| on_toggle.call(mode.toggled()),
            "{label}"
        }
    }
}
