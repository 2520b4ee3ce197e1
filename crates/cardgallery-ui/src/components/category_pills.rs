//! Category Pills Component
//!
//! Horizontal row of tag-category buttons for the filter bar. At most one
//! category is open; its pill is highlighted.

use dioxus::prelude::*;

/// Properties for the CategoryPills component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Category names in display order
    pub categories: Vec<String>,
    /// Currently expanded category
    #[props(default)]
    pub expanded: Option<String>,
    /// Number of active tags per category, same order as `categories`
    #[props(default)]
    pub active_counts: Vec<usize>,
    /// Called with the clicked category name
    pub on_select: EventHandler<String>,
}

/// CSS class for a pill
pub fn pill_class(is_expanded: bool, has_active: bool) -> &'static str {
    match (is_expanded, has_active) {
        (true, _) => "pill expanded",
        (false, true) => "pill has-active",
        (false, false) => "pill",
    }
}

/// Displays a horizontal row of category pills
///
/// # Example
///
/// ```rust,ignore
/// let mut panel = use_signal(FilterPanel::default);
///
/// rsx! {
///     CategoryPills {
///         categories: vec!["Personality".to_string(), "Position".to_string()],
///         expanded: panel.read().expanded().map(str::to_string),
///         on_select: move |name: String| panel.write().toggle(&name),
///     }
/// }
/// ```
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "tablist",
            "aria-label": "Tag categories",
            for (idx, cat) in props.categories.iter().enumerate() {
                {
                    let name = cat.clone();
                    let is_expanded = props.expanded.as_deref() == Some(cat.as_str());
                    let active = props.active_counts.get(idx).copied().unwrap_or(0);
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{cat}",
                            class: pill_class(is_expanded, active > 0),
                            role: "tab",
                            "aria-expanded": if is_expanded { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(name.clone());
                            },
                            "{cat}"
                            if active > 0 {
                                span { class: "pill__count", "{active}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
