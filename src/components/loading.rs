//! Loading placeholder shown while the catalog resolves.

use dioxus::prelude::*;

#[component]
pub fn LoadingState(#[props(default = "Loading cards...".to_string())] label: String) -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "loading__spinner" }
            p { class: "loading__label", "{label}" }
        }
    }
}
