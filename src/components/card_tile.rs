//! Card tile - one card on the board.
//!
//! Position and tilt come from the layout engine; the tile only reports
//! where the pointer went down.

use cardgallery_core::{Card, Placement, Point, TagTaxonomy};
use cardgallery_ui::{BadgeSize, TagBadgeList};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct CardTileProps {
    pub card: Card,
    pub taxonomy: TagTaxonomy,
    pub placement: Placement,
    /// 1-based stacking position, higher is in front
    pub z_index: usize,
    /// Hover tilt in degrees
    #[props(default)]
    pub tilt: f64,
    #[props(default)]
    pub dragging: bool,
    /// Pointer pressed on the tile, in client coordinates
    pub on_press: EventHandler<Point>,
}

/// Inline style placing the tile on the board
pub fn tile_style(placement: &Placement, z_index: usize, tilt: f64) -> String {
    format!(
        "transform: {}; z-index: {}; --tilt: {:.2}deg;",
        placement.css_transform(),
        z_index,
        tilt
    )
}

#[component]
pub fn CardTile(props: CardTileProps) -> Element {
    let style = tile_style(&props.placement, props.z_index, props.tilt);
    let on_press = props.on_press;
    let card = &props.card;

    rsx! {
        div {
            class: if props.dragging { "card-tile dragging" } else { "card-tile" },
            style: "{style}",
            "data-card": "{card.id.0}",
            onmousedown: move |evt| {
                // Keep the webview from starting a native image drag
                evt.prevent_default();
                let p = evt.client_coordinates();
                on_press.call(Point::new(p.x, p.y));
            },

            div { class: "card-tile__frame",
                img {
                    class: "card-tile__image",
                    src: "{card.thumbnail}",
                    alt: "{card.name}",
                    draggable: "false",
                }
                div { class: "card-tile__body",
                    h3 { class: "card-tile__name", "{card.name}" }
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
