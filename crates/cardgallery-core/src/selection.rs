//! Which card the detail popup shows, and stepping through the filtered list.

use crate::types::{Card, CardId};

/// Direction for popup navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// The card open in the popup, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<CardId>,
}

impl Selection {
    pub fn select(&mut self, id: CardId) {
        self.selected = Some(id);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected card looked up in `cards`
    pub fn card<'a>(&self, cards: &'a [Card]) -> Option<&'a Card> {
        let id = self.selected?;
        cards.iter().find(|c| c.id == id)
    }

    fn index_in(&self, cards: &[Card]) -> Option<usize> {
        let id = self.selected?;
        cards.iter().position(|c| c.id == id)
    }

    pub fn has_previous(&self, cards: &[Card]) -> bool {
        matches!(self.index_in(cards), Some(idx) if idx > 0)
    }

    pub fn has_next(&self, cards: &[Card]) -> bool {
        matches!(self.index_in(cards), Some(idx) if idx + 1 < cards.len())
    }

    /// Move to the neighbouring card. Stays put at either end.
    /// Returns the newly selected card id when it changed.
    pub fn step(&mut self, cards: &[Card], step: Step) -> Option<CardId> {
        let idx = self.index_in(cards)?;
        let target = match step {
            Step::Previous => idx.checked_sub(1)?,
            Step::Next => idx + 1,
        };
        let card = cards.get(target)?;
        self.selected = Some(card.id);
        Some(card.id)
    }

    /// Close the popup when its card is no longer visible.
    pub fn retain_in(&mut self, ids: &[CardId]) {
        if let Some(id) = self.selected {
            if !ids.contains(&id) {
                tracing::debug!(card = %id, "Selected card filtered out, closing popup");
                self.selected = None;
            }
        }
    }
}
