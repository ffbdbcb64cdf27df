//! Integration tests for the on-disk roll counter.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use d20_cli::RollStats;

#[test]
fn test_stats_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");

    let mut stats = RollStats::default();
    stats.record_roll();
    stats.record_roll();
    stats.save_to_file(&path).unwrap();

    let loaded = RollStats::load_from_file(&path).unwrap();
    assert_eq!(loaded.lifetime_rolls, 2);
    assert!(loaded.last_roll.is_some());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("stats.json");

    RollStats::default().save_to_file(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_counter_accumulates_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");

    // First session: three rolls.
    let mut stats = RollStats::default();
    for _ in 0..3 {
        stats.record_roll();
    }
    stats.save_to_file(&path).unwrap();

    // Second session picks the counter back up.
    let mut stats = RollStats::load_or_default(&path);
    assert_eq!(stats.lifetime_rolls, 3);
    stats.record_roll();
    stats.save_to_file(&path).unwrap();

    assert_eq!(RollStats::load_from_file(&path).unwrap().lifetime_rolls, 4);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let stats = RollStats::load_or_default(&dir.path().join("nope.json"));
    assert_eq!(stats, RollStats::default());
}

#[test]
fn test_corrupt_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");
    std::fs::write(&path, "{ not json").unwrap();

    let stats = RollStats::load_or_default(&path);
    assert_eq!(stats.lifetime_rolls, 0);
}

#[test]
fn test_stats_file_is_human_readable_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stats.json");

    let mut stats = RollStats::default();
    stats.record_roll();
    stats.save_to_file(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("lifetime_rolls"));
    // Pretty-printed, one field per line.
    assert!(raw.contains('\n'));
}
