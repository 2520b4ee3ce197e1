//! Page components for the card gallery.

mod dashboard;
mod gallery;

pub use dashboard::Dashboard;
pub use gallery::Gallery;
