//! Reusable UI components

mod button;
mod category_pills;
mod tag_badge;
mod tag_checklist;
mod view_toggle;

pub use button::*;
pub use category_pills::*;
pub use tag_badge::*;
pub use tag_checklist::*;
pub use view_toggle::*;
