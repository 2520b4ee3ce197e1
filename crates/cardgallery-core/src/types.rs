//! Core data types for the Card Gallery

pub mod card;
pub mod taxonomy;

pub use card::{Card, CardId};
pub use taxonomy::{FeatureTagCategory, TagTaxonomy, FALLBACK_TAG_COLOR};
