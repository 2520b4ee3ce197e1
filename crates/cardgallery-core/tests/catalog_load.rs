//! Catalog loading tests
//!
//! The loader simulates a slow fetch with `tokio::time::sleep`; these tests
//! run on paused time so the delay is observable without waiting for it.

use std::time::Duration;

use cardgallery_core::catalog::{self, load_builtin, load_cards};
use cardgallery_core::{Card, CardId, GalleryError, GalleryState};

#[tokio::test(start_paused = true)]
async fn test_load_waits_for_the_delay() {
    let taxonomy = catalog::builtin_taxonomy();
    let start = tokio::time::Instant::now();

    let cards = load_cards(catalog::builtin_cards(), &taxonomy, Duration::from_millis(1000))
        .await
        .unwrap();

    assert_eq!(cards.len(), catalog::builtin_cards().len());
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_zero_delay_resolves_immediately() {
    let start = tokio::time::Instant::now();
    let (taxonomy, cards) = load_builtin(Duration::ZERO).await.unwrap();

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert!(!taxonomy.is_empty());
    assert!(!cards.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_load_rejects_invalid_catalog() {
    let taxonomy = catalog::builtin_taxonomy();
    let cards = vec![Card::new(CardId(1), "Ghost", "", "", "").with_tags(["Haunted"])];

    let err = load_cards(cards, &taxonomy, Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(matches!(err, GalleryError::UnknownTag { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_state_starts_empty_until_load_completes() {
    let (taxonomy, cards) = load_builtin(Duration::from_millis(1000)).await.unwrap();
    let mut state = GalleryState::new(taxonomy);
    assert!(state.filtered_cards().is_empty());

    state.load_cards(cards);
    assert!(state.is_loaded());
    assert_eq!(state.filtered_cards().len(), state.cards().len());
}
