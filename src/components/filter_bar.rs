//! Filter bar - category pills with an expandable tag checklist.
//!
//! The bar only remembers which category is open. Active tags belong to
//! whoever renders it: the gallery state on the board, a local signal on the
//! dashboard.

use cardgallery_core::{FilterMode, FilterPanel, TagTaxonomy};
use cardgallery_ui::{Button, ButtonVariant, CategoryPills, TagChecklist};
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct FilterBarProps {
    pub taxonomy: TagTaxonomy,
    /// Active tags in the order they were picked
    pub active: Vec<String>,
    pub on_toggle: EventHandler<String>,
    /// Shown as a "Clear" action while any tag is active
    #[props(default)]
    pub on_clear: Option<EventHandler<()>>,
    /// Current match mode; the switch is hidden without `on_mode`
    #[props(default)]
    pub mode: FilterMode,
    #[props(default)]
    pub on_mode: Option<EventHandler<FilterMode>>,
}

/// Number of active tags in each category, in taxonomy order
fn active_counts(taxonomy: &TagTaxonomy, active: &[String]) -> Vec<usize> {
    taxonomy
        .categories()
        .iter()
        .map(|cat| active.iter().filter(|tag| cat.contains(tag)).count())
        .collect()
}

fn other_mode(mode: FilterMode) -> FilterMode {
    match mode {
        FilterMode::All => FilterMode::Any,
        FilterMode::Any => FilterMode::All,
    }
}

#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let mut panel = use_signal(FilterPanel::default);

    let categories: Vec<String> = props
        .taxonomy
        .categories()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let counts = active_counts(&props.taxonomy, &props.active);
    let expanded = panel.read().expanded().map(str::to_string);
    let expanded_tags = expanded
        .as_deref()
        .and_then(|name| props.taxonomy.category(name))
        .map(|cat| cat.tags.clone());

    let on_toggle = props.on_toggle;
    let on_clear = props.on_clear;
    let on_mode = props.on_mode;
    let mode = props.mode;
    let mode_label = format!("Match {}", mode.label());
    let has_active = !props.active.is_empty();

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-bar__row",
                CategoryPills {
                    categories: categories,
                    expanded: expanded,
                    active_counts: counts,
                    on_select: move |name: String| panel.write().toggle(&name),
                }

                if let Some(on_mode) = on_mode {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "filter-mode".to_string(),
                        onclick: move |_| on_mode.call(other_mode(mode)),
                        "{mode_label}"
                    }
                }

                if has_active {
                    if let Some(on_clear) = on_clear {
                        Button {
                            variant: ButtonVariant::Ghost,
                            class: "filter-clear".to_string(),
                            onclick: move |_| on_clear.call(()),
                            "Clear"
                        }
                    }
                }
            }

            if let Some(tags) = expanded_tags {
                TagChecklist {
                    tags: tags,
                    active: props.active.clone(),
                    on_toggle: move |tag: String| on_toggle.call(tag),
                }
            }
        }
    }
}
