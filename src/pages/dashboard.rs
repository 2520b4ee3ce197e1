//! Dashboard page - tag usage statistics over the whole catalog.
//!
//! Slides down like a curtain. Its card list has its own filters, separate
//! from the board's.

use cardgallery_core::filter::apply;
use cardgallery_core::{
    ActiveFilters, Card, CardId, DashboardSummary, FilterMode, Selection, Step,
};
use cardgallery_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{BarChart, CardList, CardPopup, FilterBar, LoadingState, PieChart};
use crate::context::{get_config, use_gallery};

#[component]
pub fn Dashboard() -> Element {
    let navigator = use_navigator();
    let gallery = use_gallery();
    let top_n = use_hook(|| get_config().dashboard_top_n);

    let mut filters = use_signal(ActiveFilters::new);
    let mut selection = use_signal(Selection::default);

    // The popup closes once its card drops out of the list
    use_effect(move || {
        let ids = {
            let state = gallery.read();
            listed_ids(state.cards(), &filters.read())
        };
        selection.write().retain_in(&ids);
    });

    let state = gallery.read();
    if !state.is_loaded() {
        return rsx! {
            div { class: "dashboard curtain-down",
                LoadingState {}
            }
        };
    }

    let taxonomy = state.taxonomy().clone();
    let summary = DashboardSummary::compute(state.cards(), &taxonomy, top_n);
    let listed = list_cards(state.cards(), &filters.read());
    let active: Vec<String> = filters.read().iter().map(str::to_string).collect();
    drop(state);

    let sel = *selection.read();
    let popup = sel
        .card(&listed)
        .cloned()
        .map(|card| (card, sel.has_previous(&listed), sel.has_next(&listed)));

    // Popup navigation steps through the dashboard's own list
    let prev_list = listed.clone();
    let next_list = listed.clone();

    rsx! {
        div { class: "dashboard curtain-down",
            div { class: "dashboard__inner",
                header { class: "dashboard__header",
                    h1 { class: "dashboard__title", "Data Visualization Dashboard" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            navigator.push(Route::Gallery {});
                        },
                        "Back to Gallery"
                    }
                }

                section { class: "dashboard__section",
                    h2 { "Top {top_n} Most Used Tags" }
                    div { class: "top-tags",
                        for (place, tc) in summary.top_tags.iter().enumerate().map(|(i, tc)| (i + 1, tc)) {
                            div { key: "{tc.tag}", class: "top-tags__item",
                                div { class: "top-tags__rank", "{place}" }
                                div { class: "top-tags__tag", "{tc.tag}" }
                                div { class: "top-tags__count", "Used {tc.count} times" }
                            }
                        }
                    }
                }

                section { class: "dashboard__section",
                    h2 { "Tag Usage" }
                    BarChart { counts: summary.tag_usage.clone() }
                }

                section { class: "dashboard__section",
                    h2 { "Tag Categories and Keywords" }
                    div { class: "pie-grid",
                        for category in summary.categories.iter() {
                            PieChart {
                                key: "{category.name}",
                                name: category.name.clone(),
                                color: category.color.clone(),
                                counts: category.slices.clone(),
                            }
                        }
                    }
                }

                section { class: "dashboard__section",
                    h2 { "Card List" }
                    FilterBar {
                        taxonomy: taxonomy.clone(),
                        active: active,
                        on_toggle: move |tag: String| {
                            filters.write().toggle(&tag);
                        },
                        on_clear: move |_| filters.write().clear(),
                    }
                    CardList {
                        cards: listed.clone(),
                        taxonomy: taxonomy.clone(),
                        on_select: move |id| selection.write().select(id),
                    }
                }
            }

            if let Some((card, has_previous, has_next)) = popup {
                CardPopup {
                    card: card,
                    taxonomy: taxonomy.clone(),
                    has_previous: has_previous,
                    has_next: has_next,
                    on_close: move |_| selection.write().close(),
                    on_previous: move |_| {
                        selection.write().step(&prev_list, Step::Previous);
                    },
                    on_next: move |_| {
                        selection.write().step(&next_list, Step::Next);
                    },
                }
            }
        }
    }
}

/// Cards shown in the dashboard list; tags are matched ALL-of.
fn list_cards(cards: &[Card], filters: &ActiveFilters) -> Vec<Card> {
    apply(cards, filters, FilterMode::All)
}

fn listed_ids(cards: &[Card], filters: &ActiveFilters) -> Vec<CardId> {
    list_cards(cards, filters).iter().map(|c| c.id).collect()
}
