#![allow(clippy::unwrap_used)]

use giveaway_bot::giveaway::{ArchiveEntry, GiveawayState, GiveawayStore, StoreError};
use tempfile::tempdir;

fn sample_state() -> GiveawayState {
    let mut state = GiveawayState::new(1_704_232_800);
    state.current_giveaway.entries.insert(111, vec![5, 17]);
    state.current_giveaway.entries.insert(222, vec![12]);

    let mut archived = GiveawayState::new(0).current_giveaway.entries;
    archived.insert(333, vec![40, 41]);
    state.archive.insert(
        "20231226".to_string(),
        ArchiveEntry {
            entries: archived,
            end_time: Some(1_703_628_000),
            winning_number: 41,
        },
    );
    state
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giveaway_data.json");

    GiveawayStore::create(&path, sample_state()).await.unwrap();
    let loaded = GiveawayStore::load(&path).await.unwrap();

    assert_eq!(loaded.state(), &sample_state());
}

#[tokio::test]
async fn test_mutation_then_save_persists_whole_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giveaway_data.json");

    let mut store = GiveawayStore::create(&path, sample_state()).await.unwrap();
    store.state_mut().current_giveaway.entries.insert(444, vec![88]);
    store.save().await.unwrap();

    let loaded = GiveawayStore::load(&path).await.unwrap();
    assert_eq!(loaded.state(), store.state());
    assert_eq!(loaded.state().archive.len(), 1);
    // No temp file left behind
    assert!(!dir.path().join("giveaway_data.json.tmp").exists());
}

#[tokio::test]
async fn test_document_uses_camel_case_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giveaway_data.json");
    GiveawayStore::create(&path, sample_state()).await.unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(json["currentGiveaway"]["endTime"], 1_704_232_800);
    assert_eq!(json["currentGiveaway"]["entries"]["111"][1], 17);
    assert_eq!(json["archive"]["20231226"]["winningNumber"], 41);
}

#[tokio::test]
async fn test_load_missing_file_fails() {
    let dir = tempdir().unwrap();
    let result = GiveawayStore::load(dir.path().join("nope.json")).await;
    assert!(matches!(result, Err(StoreError::Io { .. })));
}

#[tokio::test]
async fn test_load_malformed_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giveaway_data.json");
    std::fs::write(&path, "{ not json").unwrap();

    let result = GiveawayStore::load(&path).await;
    assert!(matches!(result, Err(StoreError::Malformed { .. })));
}

#[tokio::test]
async fn test_create_refuses_to_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("giveaway_data.json");
    GiveawayStore::create(&path, sample_state()).await.unwrap();

    let result = GiveawayStore::create(&path, GiveawayState::new(0)).await;
    assert!(matches!(result, Err(StoreError::AlreadyExists(_))));

    // Original content untouched
    let loaded = GiveawayStore::load(&path).await.unwrap();
    assert_eq!(loaded.state(), &sample_state());
}

#[tokio::test]
async fn test_create_makes_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("nested").join("giveaway_data.json");

    GiveawayStore::create(&path, GiveawayState::new(5)).await.unwrap();
    assert!(path.exists());
}
