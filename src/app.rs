use cardgallery_core::{catalog, GalleryState};
use dioxus::prelude::*;

use crate::context::get_settings;
use crate::pages::{Dashboard, Gallery};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The card board with filters and the grid/interactive toggle
/// - `/dashboard` - Tag usage charts and a filterable card list
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Gallery {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Root application component.
///
/// Provides global styles, gallery state, and routing.
#[component]
pub fn App() -> Element {
    let settings = get_settings();
    let initial_view = settings.initial_view;

    let mut gallery: Signal<GalleryState> = use_signal(move || {
        let mut state = GalleryState::new(catalog::builtin_taxonomy());
        state.set_view_mode(initial_view);
        state
    });

    use_context_provider(|| gallery);

    // Load the catalog once on mount
    use_effect(move || {
        let delay = settings.config.load_delay();
        spawn(async move {
            let taxonomy = gallery.peek().taxonomy().clone();
            match catalog::load_cards(catalog::builtin_cards(), &taxonomy, delay).await {
                Ok(cards) => {
                    gallery.write().load_cards(cards);
                }
                Err(e) => {
                    tracing::error!("Failed to load card catalog: {}", e);
                    gallery.write().load_cards(Vec::new());
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
