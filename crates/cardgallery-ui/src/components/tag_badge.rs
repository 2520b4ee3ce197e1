//! Tag Badge Component
//!
//! Small colored label for a feature tag. The color comes from the tag's
//! category.

use cardgallery_core::TagTaxonomy;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeSize {
    Small,
    #[default]
    Regular,
}

impl BadgeSize {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeSize::Small => "tag-badge tag-badge--small",
            BadgeSize::Regular => "tag-badge",
        }
    }
}

#[component]
pub fn TagBadge(
    label: String,
    /// Any CSS color
    color: String,
    #[props(default)] size: BadgeSize,
) -> Element {
    rsx! {
        span {
            class: size.class(),
            style: "background-color: {color};",
            "{label}"
        }
    }
}

/// A wrapped row of badges for a card's tags
#[component]
pub fn TagBadgeList(
    tags: Vec<String>,
    taxonomy: TagTaxonomy,
    #[props(default)] size: BadgeSize,
) -> Element {
    if tags.is_empty() {
        return VNode::empty();
    }

    for tag in tags.iter().filter(|t| !taxonomy.contains_tag(t)) {
        tracing::debug!(tag = %tag, "Tag belongs to no category, using fallback color");
    }

    rsx! {
        div { class: "tag-badges",
            for (idx, tag) in tags.iter().enumerate() {
                TagBadge {
                    key: "{idx}-{tag}",
                    label: tag.clone(),
                    color: taxonomy.color_for_tag(tag).to_string(),
                    size: size,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_size_classes() {
        assert_eq!(BadgeSize::Small.class(), "tag-badge tag-badge--small");
        assert_eq!(BadgeSize::default().class(), "tag-badge");
    }
}
