//! Card popup - full-size card over a dimmed backdrop.
//!
//! Clicking the backdrop or the close button closes it. Previous/next arrows
//! step through the list the popup was opened from and disappear at the ends.

use cardgallery_core::{Card, TagTaxonomy};
use cardgallery_ui::{CloseButton, IconButton, TagBadgeList};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardPopupProps {
    pub card: Card,
    pub taxonomy: TagTaxonomy,
    #[props(default)]
    pub has_previous: bool,
    #[props(default)]
    pub has_next: bool,
    pub on_close: EventHandler<()>,
    pub on_previous: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

#[component]
pub fn CardPopup(props: CardPopupProps) -> Element {
    let on_close = props.on_close;
    let on_previous = props.on_previous;
    let on_next = props.on_next;
    let card = &props.card;
    let alt_names = card.alt_names_line();

    rsx! {
        div {
            class: "popup-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "popup",
                role: "dialog",
                "aria-label": "{card.name}",
                onclick: move |evt| evt.stop_propagation(),

                CloseButton { onclick: move |_| on_close.call(()) }

                img {
                    class: "popup__image",
                    src: "{card.thumbnail}",
                    alt: "{card.name}",
                    draggable: "false",
                }

                div { class: "popup__body",
                    h2 { class: "popup__name", "{card.name}" }
                    if let Some(alt) = alt_names {
                        p { class: "popup__alt", "{alt}" }
                    }
                    p { class: "popup__meta", "{card.height}" }
                    p { class: "popup__meta", "Universe: {card.universe}" }

                    h3 { class: "popup__section", "Feature Tags:" }
                    TagBadgeList {
                        tags: card.feature_tags.clone(),
                        taxonomy: props.taxonomy.clone(),
                    }
                }

                if props.has_previous {
                    IconButton {
                        onclick: move |_| on_previous.call(()),
                        aria_label: "Previous card".to_string(),
                        class: "popup-nav popup-nav--prev".to_string(),
                        "\u{2039}"
                    }
                }
                if props.has_next {
                    IconButton {
                        onclick: move |_| on_next.call(()),
                        aria_label: "Next card".to_string(),
                        class: "popup-nav popup-nav--next".to_string(),
                        "\u{203A}"
                    }
                }
            }
        }
    }
}
