//! Card list - compact rows for the dashboard, one per card.

use cardgallery_core::{Card, CardId, TagTaxonomy};
use cardgallery_ui::{BadgeSize, TagBadgeList};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardListProps {
    pub cards: Vec<Card>,
    pub taxonomy: TagTaxonomy,
    pub on_select: EventHandler<CardId>,
}

#[component]
pub fn CardList(props: CardListProps) -> Element {
    if props.cards.is_empty() {
        return rsx! {
            p { class: "card-list__empty", "No cards match the active filters." }
        };
    }

    let on_select = props.on_select;

    rsx! {
        ul { class: "card-list",
            for card in props.cards.iter() {
                {
                    let id = card.id;
                    rsx! {
                        li {
                            key: "{id.0}",
                            class: "card-list__item",
                            onclick: move |_| on_select.call(id),
                            span { class: "card-list__name", "{card.name}" }
                            TagBadgeList {
                                tags: card.feature_tags.clone(),
                                taxonomy: props.taxonomy.clone(),
                                size: BadgeSize::Small,
                            }
                        }
                    }
                }
            }
        }
    }
}
