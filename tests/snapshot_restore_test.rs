//! Saving the gallery on exit and restoring it on the next launch.

mod common;

use common::page;
use giftrend::api::FetchResult;
use giftrend::models::GallerySnapshot;
use giftrend::state::GalleryState;
use giftrend::storage::SnapshotStore;
use tempfile::TempDir;

fn loaded(pages: &[&[&str]]) -> GalleryState {
    let mut gallery = GalleryState::new(20);
    for ids in pages {
        let offset = gallery.begin_load().unwrap();
        gallery.apply_result(offset, FetchResult::Success(page(ids)));
    }
    gallery
}

#[test]
fn test_save_and_restore_keeps_items_and_cursor() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp_dir.path().join("giftrend").join("gallery.json"));

    let gallery = loaded(&[&["A", "B"], &["B", "C"]]);
    store.save(&gallery.snapshot()).unwrap();

    let snapshot = store.load().unwrap().expect("snapshot should exist");
    let restored = GalleryState::restore(snapshot, 20);

    let ids: Vec<_> = restored.items().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
    assert_eq!(restored.cursor(), 40);
    assert!(!restored.needs_initial_load());
}

#[test]
fn test_restore_drops_duplicate_ids() {
    let snapshot = GallerySnapshot {
        data: page(&["A", "B", "A"]).data,
        offset: 20,
    };
    let restored = GalleryState::restore(snapshot, 20);
    assert_eq!(restored.len(), 2);
}

#[test]
fn test_corrupt_snapshot_falls_back_to_fresh() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gallery.json");
    std::fs::write(&path, "not json").unwrap();

    let store = SnapshotStore::new(&path);
    assert!(store.load().is_err());
    assert!(store.load_or_default().is_none());
}

#[test]
fn test_clear_then_load_is_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp_dir.path().join("gallery.json"));

    store.save(&loaded(&[&["A"]]).snapshot()).unwrap();
    store.clear().unwrap();

    assert!(store.load().unwrap().is_none());
    // Clearing twice is fine
    store.clear().unwrap();
}
