//! Built-in card catalog and the (simulated) asynchronous loader.

use std::collections::HashSet;
use std::time::Duration;

use crate::error::{GalleryError, GalleryResult};
use crate::types::{Card, CardId, FeatureTagCategory, TagTaxonomy};

/// The tag taxonomy shipped with the gallery.
pub fn builtin_taxonomy() -> TagTaxonomy {
    TagTaxonomy::new(vec![
        FeatureTagCategory::new("Personality", "#f472b6", ["Grumpy", "Sensitive", "Kind"]),
        FeatureTagCategory::new("Background", "#60a5fa", ["City", "Countryside", "Space"]),
        FeatureTagCategory::new("Position", "#4ade80", ["Leader", "Supporter", "Striker"]),
    ])
}

/// The cards shipped with the gallery.
pub fn builtin_cards() -> Vec<Card> {
    const MOUNT_HUA: &str = "Return of the Mount Hua Sect";
    const GALAR: &str = "Pokémon Sword and Shield";

    vec![
        Card::new(CardId(1), "Dangbo", "./thumbs/dangbo.png", "187cm", MOUNT_HUA)
            .with_alt_name("당보")
            .with_tags(["Kind", "Countryside", "Supporter"]),
        Card::new(CardId(2), "Nezu", "./thumbs/nezu.png", "173cm", GALAR)
            .with_alt_name("ネズ")
            .with_alt_name("Piers")
            .with_tags(["Grumpy", "City", "Leader"]),
        Card::new(CardId(3), "Kibana", "./thumbs/kibana.png", "203cm", GALAR)
            .with_alt_name("キバナ")
            .with_alt_name("Raihan")
            .with_tags(["Sensitive", "City", "Striker"]),
        Card::new(CardId(4), "Dande", "./thumbs/dande.png", "198cm", GALAR)
            .with_alt_name("ダンデ")
            .with_alt_name("Leon")
            .with_tags(["Kind", "City", "Leader"]),
        Card::new(CardId(5), "Chung Myung", "./thumbs/chungmyung.png", "172cm", MOUNT_HUA)
            .with_alt_name("청명")
            .with_tags(["Grumpy", "Countryside", "Striker"]),
        Card::new(CardId(6), "Baek Cheon", "./thumbs/baekcheon.png", "183cm", MOUNT_HUA)
            .with_alt_name("백천")
            .with_tags(["Sensitive", "Countryside", "Leader"]),
        Card::new(CardId(7), "Yoon Jong", "./thumbs/yoonjong.png", "180cm", MOUNT_HUA)
            .with_alt_name("윤종")
            .with_tags(["Kind", "Countryside", "Supporter"]),
        Card::new(CardId(8), "Jo Gul", "./thumbs/jogul.png", "179cm", MOUNT_HUA)
            .with_alt_name("조걸")
            .with_tags(["Grumpy", "Countryside", "Striker"]),
    ]
}

/// Check card ids are unique and every tag is declared by the taxonomy.
pub fn validate_catalog(cards: &[Card], taxonomy: &TagTaxonomy) -> GalleryResult<()> {
    let mut seen = HashSet::new();
    for card in cards {
        if !seen.insert(card.id) {
            return Err(GalleryError::DuplicateCardId(card.id));
        }
        if let Some(tag) = card.feature_tags.iter().find(|t| !taxonomy.contains_tag(t)) {
            return Err(GalleryError::UnknownTag {
                card: card.id,
                tag: tag.clone(),
            });
        }
    }
    Ok(())
}

/// Resolve `cards` after `delay`, validated against `taxonomy`.
///
/// Stands in for a network fetch; the delay lets the UI show its loading
/// state.
pub async fn load_cards(
    cards: Vec<Card>,
    taxonomy: &TagTaxonomy,
    delay: Duration,
) -> GalleryResult<Vec<Card>> {
    if !delay.is_zero() {
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Simulating catalog load");
        tokio::time::sleep(delay).await;
    }
    validate_catalog(&cards, taxonomy)?;
    tracing::info!(cards = cards.len(), "Catalog ready");
    Ok(cards)
}

/// Load the built-in taxonomy and cards.
pub async fn load_builtin(delay: Duration) -> GalleryResult<(TagTaxonomy, Vec<Card>)> {
    let taxonomy = builtin_taxonomy();
    let cards = load_cards(builtin_cards(), &taxonomy, delay).await?;
    Ok((taxonomy, cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert!(validate_catalog(&builtin_cards(), &builtin_taxonomy()).is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut cards = builtin_cards();
        cards.push(cards[0].clone());
        let err = validate_catalog(&cards, &builtin_taxonomy()).unwrap_err();
        assert!(matches!(err, GalleryError::DuplicateCardId(CardId(1))));
    }

    #[test]
    fn test_undeclared_tag_rejected() {
        let cards = vec![Card::new(CardId(1), "X", "", "", "").with_tags(["Black Hair"])];
        let err = validate_catalog(&cards, &builtin_taxonomy()).unwrap_err();
        assert!(matches!(err, GalleryError::UnknownTag { tag, .. } if tag == "Black Hair"));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        assert!(validate_catalog(&[], &builtin_taxonomy()).is_ok());
    }
}
