//! Tag Checklist Component
//!
//! The list of tags shown under an expanded category. Each row is a toggle
//! with a round indicator that fills when the tag is active.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TagChecklistProps {
    pub tags: Vec<String>,
    /// Tags currently active (across all categories)
    pub active: Vec<String>,
    /// Called with the toggled tag
    pub on_toggle: EventHandler<String>,
}

#[component]
pub fn TagChecklist(props: TagChecklistProps) -> Element {
    rsx! {
        div { class: "tag-checklist",
            for tag in props.tags.iter() {
                {
                    let name = tag.clone();
                    let checked = props.active.iter().any(|t| t == tag);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        label {
                            key: "{tag}",
                            class: if checked { "tag-check checked" } else { "tag-check" },
                            input {
                                r#type: "checkbox",
                                class: "visually-hidden",
                                checked: checked,
                                onchange: move |_| on_toggle.call(name.clone()),
                            }
                            span { class: "tag-check__dot" }
                            span { class: "tag-check__label", "{tag}" }
                        }
                    }
                }
            }
        }
    }
}
