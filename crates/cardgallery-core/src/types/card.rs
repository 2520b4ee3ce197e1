//! Card - a single illustrated character in the gallery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a card within the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CardId {
    fn from(value: u32) -> Self {
        CardId(value)
    }
}

/// A displayable character card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Display name
    pub name: String,
    /// Localized or alternate names, in display order
    #[serde(default)]
    pub alt_names: Vec<String>,
    /// Relative path of the thumbnail image
    pub thumbnail: String,
    /// Physical descriptor, free text ("187cm")
    pub height: String,
    /// Universe or franchise the character comes from
    pub universe: String,
    /// Ordered feature tags
    #[serde(default)]
    pub feature_tags: Vec<String>,
}

impl Card {
    /// Create a card with no alternate names and no tags.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        thumbnail: impl Into<String>,
        height: impl Into<String>,
        universe: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            alt_names: Vec::new(),
            thumbnail: thumbnail.into(),
            height: height.into(),
            universe: universe.into(),
            feature_tags: Vec::new(),
        }
    }

    /// Builder: add an alternate name
    pub fn with_alt_name(mut self, name: impl Into<String>) -> Self {
        self.alt_names.push(name.into());
        self
    }

    /// Builder: replace the feature tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.feature_tags.iter().any(|t| t == tag)
    }

    /// Alternate names joined for a subtitle line, or None when there are none.
    pub fn alt_names_line(&self) -> Option<String> {
        if self.alt_names.is_empty() {
            None
        } else {
            Some(self.alt_names.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = Card::new(CardId(1), "Dangbo", "./thumbs/dangbo.png", "187cm", "Return of the Mount Hua Sect")
            .with_alt_name("당보")
            .with_tags(["Kind", "Supporter"]);

        assert_eq!(card.id, CardId(1));
        assert!(card.has_tag("Kind"));
        assert!(!card.has_tag("Leader"));
        assert_eq!(card.alt_names_line().as_deref(), Some("당보"));
    }

    #[test]
    fn test_alt_names_line_empty() {
        let card = Card::new(CardId(2), "Nezu", "./thumbs/nezu.png", "173cm", "Pokémon");
        assert_eq!(card.alt_names_line(), None);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId(12).to_string(), "#12");
    }

    #[test]
    fn test_card_serde_defaults() {
        let json = r#"{"id":3,"name":"Kibana","thumbnail":"k.png","height":"203cm","universe":"Pokémon"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, CardId(3));
        assert!(card.alt_names.is_empty());
        assert!(card.feature_tags.is_empty());
    }
}
