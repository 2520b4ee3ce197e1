//! Read-only aggregates over the card collection for the dashboard.
//!
//! A card counts at most once per tag, even if the tag is listed twice on it.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::types::{Card, TagTaxonomy};

/// Number of cards carrying a tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

impl TagCount {
    pub fn new(tag: impl Into<String>, count: usize) -> Self {
        Self {
            tag: tag.into(),
            count,
        }
    }
}

/// Tag usage inside one category (zero-count tags omitted)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsage {
    pub name: String,
    pub color: String,
    pub slices: Vec<TagCount>,
}

impl CategoryUsage {
    /// No card uses any of the category's tags
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

fn count_cards_with(cards: &[Card], tag: &str) -> usize {
    cards.iter().filter(|c| c.has_tag(tag)).count()
}

/// Every tag used by at least one card, most used first. Ties are ordered by
/// tag name.
pub fn tag_counts(cards: &[Card]) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for card in cards {
        let unique: HashSet<&str> = card.feature_tags.iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_default() += 1;
        }
    }

    let mut ranked: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount::new(tag, count))
        .collect();
    // BTreeMap already yields name order; a stable sort keeps it for ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `n` most used tags
pub fn top_tags(cards: &[Card], n: usize) -> Vec<TagCount> {
    let mut ranked = tag_counts(cards);
    ranked.truncate(n);
    ranked
}

/// Usage of every declared tag, in taxonomy order, zeros included.
pub fn tag_usage(cards: &[Card], taxonomy: &TagTaxonomy) -> Vec<TagCount> {
    taxonomy
        .all_tags()
        .into_iter()
        .map(|tag| TagCount::new(tag, count_cards_with(cards, tag)))
        .collect()
}

/// Per-category breakdown for the pie charts.
pub fn category_usage(cards: &[Card], taxonomy: &TagTaxonomy) -> Vec<CategoryUsage> {
    taxonomy
        .categories()
        .iter()
        .map(|category| CategoryUsage {
            name: category.name.clone(),
            color: category.color.clone(),
            slices: category
                .tags
                .iter()
                .map(|tag| TagCount::new(tag.as_str(), count_cards_with(cards, tag)))
                .filter(|tc| tc.count > 0)
                .collect(),
        })
        .collect()
}

/// Everything the dashboard charts need, computed in one go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub card_total: usize,
    pub top_tags: Vec<TagCount>,
    pub tag_usage: Vec<TagCount>,
    pub categories: Vec<CategoryUsage>,
}

impl DashboardSummary {
    pub fn compute(cards: &[Card], taxonomy: &TagTaxonomy, top_n: usize) -> Self {
        Self {
            card_total: cards.len(),
            top_tags: top_tags(cards, top_n),
            tag_usage: tag_usage(cards, taxonomy),
            categories: category_usage(cards, taxonomy),
        }
    }

    /// Highest single tag usage, for scaling bars
    pub fn max_usage(&self) -> usize {
        self.tag_usage.iter().map(|t| t.count).max().unwrap_or(0)
    }
}
