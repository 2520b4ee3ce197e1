//! Card Gallery UI Components
//!
//! Small Dioxus building blocks shared by the gallery pages: buttons, tag
//! badges, the category pills and tag checklist of the filter bar, and the
//! grid/interactive view toggle.
//!
//! Styling comes from class names only; the stylesheet lives with the app.

pub mod components;

pub use components::*;
