//! Application state store.
//!
//! `GalleryState` owns the card collection, the tag taxonomy, the active
//! filters and the view mode. The filtered list is recomputed after every
//! change that can affect it and is only ever read from outside.

use crate::error::GalleryResult;
use crate::filter::{self, ActiveFilters, FilterMode};
use crate::layout::ViewMode;
use crate::types::{Card, CardId, TagTaxonomy};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    cards: Vec<Card>,
    filtered: Vec<Card>,
    filters: ActiveFilters,
    filter_mode: FilterMode,
    view: ViewMode,
    taxonomy: TagTaxonomy,
    loaded: bool,
}

impl GalleryState {
    /// Empty, not yet loaded state
    pub fn new(taxonomy: TagTaxonomy) -> Self {
        Self {
            taxonomy,
            ..Self::default()
        }
    }

    /// Install the loaded card collection. Active filters are kept.
    pub fn load_cards(&mut self, cards: Vec<Card>) {
        tracing::info!(count = cards.len(), "Card collection loaded");
        self.cards = cards;
        self.loaded = true;
        self.recompute();
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn filtered_cards(&self) -> &[Card] {
        &self.filtered
    }

    pub fn filtered_ids(&self) -> Vec<CardId> {
        self.filtered.iter().map(|c| c.id).collect()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    pub fn taxonomy(&self) -> &TagTaxonomy {
        &self.taxonomy
    }

    /// Toggle a tag filter. Returns true when the tag is now active.
    pub fn toggle_filter(&mut self, tag: &str) -> bool {
        let active = self.filters.toggle(tag);
        tracing::debug!(tag, active, "Filter toggled");
        self.recompute();
        active
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.recompute();
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        if self.filter_mode != mode {
            self.filter_mode = mode;
            self.recompute();
        }
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        if self.view != view {
            tracing::debug!(%view, "View mode changed");
            self.view = view;
        }
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.set_view_mode(self.view.toggled());
        self.view
    }

    /// Replace the taxonomy with the result of `update`. On error the current
    /// taxonomy stays in place.
    ///
    /// ```ignore
    /// state.update_taxonomy(|t| t.with_tag("Position", "Striker"))?;
    /// ```
    pub fn update_taxonomy<F>(&mut self, update: F) -> GalleryResult<()>
    where
        F: FnOnce(&TagTaxonomy) -> GalleryResult<TagTaxonomy>,
    {
        let next = update(&self.taxonomy)?;
        self.taxonomy = next;
        Ok(())
    }

    fn recompute(&mut self) {
        self.filtered = filter::apply(&self.cards, &self.filters, self.filter_mode);
    }
}
