//! Card board - the cards of the filtered set, in grid or interactive layout.
//!
//! The board owns the `LayoutEngine`, the popup `Selection` and the per-card
//! tilts. It measures itself on mount and on every resize, feeds pointer
//! events to the engine in board coordinates, and opens the popup when a
//! gesture resolves to a click.

use std::rc::Rc;
use std::time::Instant;

use cardgallery_core::cosmetics::DEFAULT_MAX_TILT;
use cardgallery_core::{
    Bounds, Card, CardId, Cosmetics, GestureOutcome, LayoutConfig, LayoutEngine, Placement, Point,
    Selection, Step, ViewMode,
};
use cardgallery_ui::{Button, ButtonVariant};
use dioxus::prelude::*;

use super::{CardPopup, CardTile};
use crate::context::{get_settings, use_gallery};

/// Everything a tile needs, collected before rendering
struct TileView {
    id: CardId,
    card: Card,
    placement: Placement,
    z_index: usize,
    tilt: f64,
    dragging: bool,
}

fn board_class(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Grid => "card-board card-board--grid",
        ViewMode::Interactive => "card-board card-board--interactive",
    }
}

/// Card size and top strip as CSS variables. Grid boards also grow with
/// their content; the interactive board fills the viewport through CSS.
fn board_style(view: ViewMode, content_height: f64, config: &LayoutConfig) -> String {
    let vars = format!(
        "--card-w: {:.0}px; --card-h: {:.0}px; --reserved-top: {:.0}px;",
        config.card_width, config.card_height, config.reserved_top
    );
    match view {
        ViewMode::Grid => format!("{} height: {:.0}px;", vars, content_height),
        ViewMode::Interactive => vars,
    }
}

#[component]
pub fn CardBoard() -> Element {
    let mut gallery = use_gallery();
    let settings = use_hook(get_settings);
    let layout = settings.config.layout.clone();
    let seed = settings.seed;

    let mut engine = use_signal(move || LayoutEngine::new(layout, seed));
    // Tilts get their own stream so they don't shift board placements
    let mut cosmetics = use_signal(move || Cosmetics::new(DEFAULT_MAX_TILT, seed.wrapping_add(1)));
    let mut selection = use_signal(Selection::default);
    let mut origin = use_signal(Point::default);
    let mut board: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Follow the visible card set and the view mode
    use_effect(move || {
        let (ids, view) = {
            let state = gallery.read();
            (state.filtered_ids(), state.view_mode())
        };

        {
            let mut eng = engine.write();
            if eng.mode() != view {
                eng.set_mode(view, &ids);
            } else {
                eng.sync(&ids);
            }
        }
        cosmetics.write().retain_for(&ids);
        selection.write().retain_in(&ids);
    });

    let measure = move |el: Rc<MountedData>| async move {
        match el.get_client_rect().await {
            Ok(rect) => {
                origin.set(Point::new(rect.origin.x, rect.origin.y));
                engine
                    .write()
                    .resize(Bounds::new(rect.size.width, rect.size.height));
            }
            Err(e) => tracing::warn!("Failed to measure card board: {:?}", e),
        }
    };

    let to_board = move |x: f64, y: f64| Point::new(x, y).offset_from(*origin.peek());

    let mut press = move |id: CardId, client: Point| {
        let pointer = client.offset_from(*origin.peek());
        engine.write().pointer_down(id, pointer, Instant::now());
    };

    let (view, style, tiles, empty, popup, taxonomy) = {
        let state = gallery.read();
        let eng = engine.read();
        let tilts = cosmetics.read();
        let view = eng.mode();

        let tiles: Vec<TileView> = state
            .filtered_cards()
            .iter()
            .filter_map(|card| {
                let placement = eng.placement(card.id)?;
                Some(TileView {
                    id: card.id,
                    card: card.clone(),
                    placement,
                    z_index: eng.z_index(card.id),
                    tilt: tilts.tilt(card.id),
                    dragging: eng.dragging() == Some(card.id),
                })
            })
            .collect();

        let sel = *selection.read();
        let filtered = state.filtered_cards();
        let popup = sel
            .card(filtered)
            .cloned()
            .map(|card| (card, sel.has_previous(filtered), sel.has_next(filtered)));

        (
            view,
            board_style(view, eng.content_height(), eng.config()),
            tiles,
            filtered.is_empty(),
            popup,
            state.taxonomy().clone(),
        )
    };

    rsx! {
        div {
            class: board_class(view),
            style: "{style}",
            onmounted: move |evt| {
                let el = evt.data();
                board.set(Some(el.clone()));
                spawn(measure(el));
            },
            onresize: move |_| {
                let el = board.peek().as_ref().cloned();
                if let Some(el) = el {
                    spawn(measure(el));
                }
            },
            onmousemove: move |evt| {
                if engine.peek().gesture().card().is_none() {
                    return;
                }
                let c = evt.client_coordinates();
                engine.write().pointer_move(to_board(c.x, c.y));
            },
            onmouseup: move |evt| {
                if engine.peek().gesture().card().is_none() {
                    return;
                }
                let c = evt.client_coordinates();
                let outcome = engine.write().pointer_up(to_board(c.x, c.y), Instant::now());
                if let GestureOutcome::Clicked(id) = outcome {
                    selection.write().select(id);
                }
            },
            onmouseleave: move |_| {
                if engine.peek().gesture().card().is_some() {
                    engine.write().cancel_gesture();
                }
            },

            if empty {
                div { class: "board-empty",
                    p { "No cards match the active filters." }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| gallery.write().clear_filters(),
                        "Clear filters"
                    }
                }
            }

            for tile in tiles {
                CardTile {
                    key: "{tile.id.0}",
                    card: tile.card,
                    taxonomy: taxonomy.clone(),
                    placement: tile.placement,
                    z_index: tile.z_index,
                    tilt: tile.tilt,
                    dragging: tile.dragging,
                    on_press: move |p: Point| press(tile.id, p),
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
                    let state = gallery.read();
                    selection.write().step(state.filtered_cards(), Step::Previous);
                },
                on_next: move |_| {
                    let state = gallery.read();
                    selection.write().step(state.filtered_cards(), Step::Next);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_board_takes_content_height() {
        let config = LayoutConfig::default();
        let grid = board_style(ViewMode::Grid, 696.4, &config);
        assert!(grid.starts_with("--card-w: 200px; --card-h: 280px; --reserved-top: 96px;"));
        assert!(grid.ends_with("height: 696px;"));
        assert!(!board_style(ViewMode::Interactive, 696.4, &config).contains("height:"));
    }

    #[test]
    fn board_class_names_mode() {
        assert!(board_class(ViewMode::Interactive).ends_with("--interactive"));
        assert!(board_class(ViewMode::Grid).ends_with("--grid"));
    }
}
