//! Gallery page - the card board with its filter bar.
//!
//! The header carries the title, the dashboard link and the grid/interactive
//! toggle. The filter bar floats over the reserved top strip of the board.

use cardgallery_core::FilterMode;
use cardgallery_ui::{Button, ButtonVariant, ViewToggle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardBoard, FilterBar, LoadingState};
use crate::context::{get_config, use_gallery};

/// "Showing 3 of 8 cards"
fn summary_line(shown: usize, total: usize) -> String {
    if shown == total {
        format!("Showing all {} cards", total)
    } else {
        format!("Showing {} of {} cards", shown, total)
    }
}

#[component]
pub fn Gallery() -> Element {
    let navigator = use_navigator();
    let mut gallery = use_gallery();
    let title = use_hook(|| get_config().window.title);

    let (loaded, view, mode, active, taxonomy, summary) = {
        let state = gallery.read();
        (
            state.is_loaded(),
            state.view_mode(),
            state.filter_mode(),
            state.filters().iter().map(str::to_string).collect::<Vec<_>>(),
            state.taxonomy().clone(),
            summary_line(state.filtered_cards().len(), state.cards().len()),
        )
    };

    rsx! {
        div { class: "gallery-page",
            header { class: "app-header",
                h1 { class: "app-title", "{title}" }
                div { class: "app-header__actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            navigator.push(Route::Dashboard {});
                        },
                        "Dashboard"
                    }
                    ViewToggle {
                        mode: view,
                        on_toggle: move |next| {
                            gallery.write().set_view_mode(next);
                        },
                    }
                }
            }

            main { class: "gallery-main",
                if loaded {
                    div { class: "board-wrap",
                        div { class: "board-toolbar",
                            FilterBar {
                                taxonomy: taxonomy,
                                active: active,
                                on_toggle: move |tag: String| {
                                    gallery.write().toggle_filter(&tag);
                                },
                                on_clear: move |_| gallery.write().clear_filters(),
                                mode: mode,
                                on_mode: move |next: FilterMode| gallery.write().set_filter_mode(next),
                            }
                            p { class: "board-toolbar__summary", "{summary}" }
                        }
                        CardBoard {}
                    }
                } else {
                    LoadingState {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_mentions_counts() {
        assert_eq!(summary_line(8, 8), "Showing all 8 cards");
        assert_eq!(summary_line(3, 8), "Showing 3 of 8 cards");
        assert_eq!(summary_line(0, 8), "Showing 0 of 8 cards");
    }
}
