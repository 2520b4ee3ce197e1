//! Tag filtering.
//!
//! The active filters are an ordered set of tag strings. The filtered card
//! list is always derived from (cards, filters, mode) through [`apply`]; it is
//! never edited directly.

use serde::{Deserialize, Serialize};

use crate::types::Card;

/// How multiple active tags combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// A card must carry every active tag
    #[default]
    All,
    /// A card must carry at least one active tag
    Any,
}

impl FilterMode {
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Any => "any",
        }
    }
}

/// Insertion-ordered set of selected tags.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActiveFilters {
    tags: Vec<String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from tags, dropping repeats.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filters = Self::new();
        for tag in tags {
            let tag = tag.into();
            if !filters.contains(&tag) {
                filters.tags.push(tag);
            }
        }
        filters
    }

    /// Add the tag when absent, remove it when present.
    ///
    /// Returns true when the tag is active afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(idx) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(idx);
            false
        } else {
            self.tags.push(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Does `card` pass these filters under `mode`? Empty filters pass everything.
    pub fn matches(&self, card: &Card, mode: FilterMode) -> bool {
        if self.tags.is_empty() {
            return true;
        }
        match mode {
            FilterMode::All => self.tags.iter().all(|t| card.has_tag(t)),
            FilterMode::Any => self.tags.iter().any(|t| card.has_tag(t)),
        }
    }
}

/// Derive the visible cards, keeping collection order.
pub fn apply(cards: &[Card], filters: &ActiveFilters, mode: FilterMode) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| filters.matches(card, mode))
        .cloned()
        .collect()
}

/// Which tag category the filter bar has expanded. At most one at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPanel {
    expanded: Option<String>,
}

impl FilterPanel {
    /// Clicking the open category closes it; clicking another one switches.
    pub fn toggle(&mut self, category: &str) {
        if self.expanded.as_deref() == Some(category) {
            self.expanded = None;
        } else {
            self.expanded = Some(category.to_string());
        }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.as_deref() == Some(category)
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
