//! CLI Integration Tests
//!
//! These tests verify the CLI commands work end-to-end against the built-in
//! catalog.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

fn cli_cmd() -> Command {
    Command::cargo_bin("cardgallery").expect("Failed to find cardgallery binary")
}

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp config");
    file.write_all(json.as_bytes()).expect("Failed to write temp config");
    file
}

// ============================================================================
// Cards Command Tests
// ============================================================================

#[test]
fn test_cards_lists_everything() {
    cli_cmd()
        .arg("cards")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (8 of 8):"))
        .stdout(predicate::str::contains("#1 Dangbo (당보)"))
        .stdout(predicate::str::contains("Tags: Grumpy, City, Leader"));
}

#[test]
fn test_cards_all_tags_must_match() {
    cli_cmd()
        .args(["cards", "--tag", "Leader", "--tag", "City"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (2 of 8):"))
        .stdout(predicate::str::contains("Nezu"))
        .stdout(predicate::str::contains("Dande"))
        .stdout(predicate::str::contains("Dangbo").not());
}

#[test]
fn test_cards_any_mode() {
    cli_cmd()
        .args(["cards", "--tag", "Leader", "--tag", "Supporter", "--any"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (5 of 8):"));
}

#[test]
fn test_cards_no_match() {
    cli_cmd()
        .args(["cards", "--tag", "Leader", "--tag", "Supporter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards match the active filters."));
}

#[test]
fn test_cards_repeated_tag_counts_once() {
    cli_cmd()
        .args(["cards", "-t", "Kind", "-t", "Kind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cards (3 of 8):"));
}

// ============================================================================
// Tags Command Tests
// ============================================================================

#[test]
fn test_tags_shows_taxonomy() {
    cli_cmd()
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personality (#f472b6)"))
        .stdout(predicate::str::contains("  - Countryside"))
        .stdout(predicate::str::contains("Position (#4ade80)"));
}

// ============================================================================
// Stats Command Tests
// ============================================================================

#[test]
fn test_stats_ranks_top_tags() {
    cli_cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 3 tags:"))
        .stdout(predicate::str::contains("1. Countryside (used 5 times)"))
        .stdout(predicate::str::contains("2. City (used 3 times)"))
        .stdout(predicate::str::contains("3. Grumpy (used 3 times)"));
}

#[test]
fn test_stats_category_breakdown_skips_unused_tags() {
    cli_cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Background: City 3, Countryside 5"));
}

#[test]
fn test_stats_json() {
    cli_cmd()
        .args(["stats", "--json", "--top", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"card_total\": 8"))
        .stdout(predicate::str::contains("\"tag\": \"Countryside\""));
}

#[test]
fn test_stats_top_from_config() {
    let config = config_file(r#"{ "dashboard_top_n": 1 }"#);

    cli_cmd()
        .arg("--config")
        .arg(config.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 1 tags:"))
        .stdout(predicate::str::contains("2. City").not());
}

// ============================================================================
// Layout Command Tests
// ============================================================================

#[test]
fn test_layout_grid() {
    cli_cmd()
        .args(["layout", "--width", "1280", "--height", "800"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Layout: Grid, 1280x800, 5 columns"))
        .stdout(predicate::str::contains("x=  100.0 y=   96.0 rot=  0.00  Dangbo"));
}

#[test]
fn test_layout_narrow_board_single_column() {
    cli_cmd()
        .args(["layout", "--width", "150", "--height", "800", "--tag", "Leader"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 columns"))
        .stdout(predicate::str::contains("Nezu"))
        .stdout(predicate::str::contains("Dangbo").not());
}

#[test]
fn test_layout_interactive_is_repeatable_with_seed() {
    let args = [
        "layout", "--width", "1280", "--height", "800", "--mode", "interactive", "--seed", "7",
    ];
    let first = cli_cmd().args(args).output().unwrap();
    let second = cli_cmd().args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains("seed 7"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_invalid_config_fails() {
    let config = config_file(r#"{ "layout": { "card_width": -1.0 } }"#);

    cli_cmd()
        .arg("--config")
        .arg(config.path())
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_unknown_mode_rejected() {
    cli_cmd()
        .args(["layout", "--width", "800", "--height", "600", "--mode", "masonry"])
        .assert()
        .failure();
}
