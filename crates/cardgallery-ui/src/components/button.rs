//! Button Components
//!
//! - Primary: main actions (view switch, dashboard link)
//! - Ghost: quiet secondary actions
//! - IconButton: round glyph buttons (close, previous, next)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Join a base class with optional extra classes
pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    /// Click handler; a button without one renders but does nothing
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| state.write().toggle_view_mode(),
///         "Switch to Interactive View"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, previous, next)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}
