//! Color constants used outside the stylesheet (inline SVG and chart bars).
//!
//! Tag and category colors come from the taxonomy, not from here.

// === CHARTS ===
pub const BAR_FILL: &str = "#8884d8";
pub const SLICE_STROKE: &str = "#ffffff";
pub const NO_DATA: &str = "#e5e7eb";
