//! Error types for the Card Gallery

use thiserror::Error;

use crate::types::CardId;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// Two cards in one collection share an id
    #[error("Duplicate card id: {0}")]
    DuplicateCardId(CardId),

    /// A card carries a tag that no category declares
    #[error("Card {card} uses undeclared tag: {tag}")]
    UnknownTag { card: CardId, tag: String },

    /// Taxonomy update targeted a category that does not exist
    #[error("Category not found: {0}")]
    UnknownCategory(String),

    /// A category with this name is already declared
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Tag strings must be unique inside a single category
    #[error("Tag {tag} already exists in category {category}")]
    DuplicateTag { category: String, tag: String },

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::UnknownTag {
            card: CardId(4),
            tag: "Pirate".to_string(),
        };
        assert_eq!(format!("{}", err), "Card #4 uses undeclared tag: Pirate");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleryError = io_err.into();
        assert!(matches!(err, GalleryError::Io(_)));
    }
}
