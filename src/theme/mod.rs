//! Visual theme: the global stylesheet and chart colors.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
