//! Entry store behaviour through the library API

use chrono::NaiveDate;
use dayjot::domain::EntryId;
use dayjot::infrastructure::{EntryStore, FileStorage, LoadSource};
use dayjot::DayjotError;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn file_store(temp: &TempDir) -> EntryStore<FileStorage> {
    EntryStore::new(FileStorage::new(temp.path().to_path_buf()))
}

#[test]
fn test_full_scenario_on_disk() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    assert_eq!(store.load_snapshot().unwrap().source, LoadSource::Missing);

    let hello = store.create(day(1), "Hello").unwrap();
    let world = store.create(day(1), "World").unwrap();

    // A second handle sees what the first one wrote
    let reader = file_store(&temp);
    let texts: Vec<_> = reader.find_by_date(day(1)).into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["World", "Hello"]);

    reader.toggle_favorite(&hello.id).unwrap();
    let favorites = store.find_favorites();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].text, "Hello");

    store.delete(&world.id).unwrap();
    let remaining = reader.find_by_date(day(1));
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, hello.id);
}

#[test]
fn test_round_trip_through_disk() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    store.create(day(1), "a").unwrap();
    let b = store.create(day(2), "b").unwrap();
    store.update(&b.id, "b, edited").unwrap();
    store.toggle_favorite(&b.id).unwrap();

    let snapshot = store.load_all();
    let other = TempDir::new().unwrap();
    let copy = file_store(&other);
    copy.save_all(&snapshot).unwrap();

    assert_eq!(copy.load_all(), snapshot);
}

#[test]
fn test_not_found_on_missing_ids() {
    let temp = TempDir::new().unwrap();
    let store = file_store(&temp);
    let missing = EntryId::new("0");

    assert!(matches!(store.update(&missing, "x"), Err(DayjotError::EntryNotFound(_))));
    assert!(matches!(store.toggle_favorite(&missing), Err(DayjotError::EntryNotFound(_))));
    assert!(matches!(store.delete(&missing), Err(DayjotError::EntryNotFound(_))));
    assert!(store.load_all().is_empty());
}

#[test]
fn test_parallel_mutations_lose_nothing() {
    let temp = TempDir::new().unwrap();
    let store = Arc::new(file_store(&temp));
    let seeded: Vec<_> = (0..10)
        .map(|n| store.create(day(1), format!("seed {}", n)).unwrap())
        .collect();

    let deleter = {
        let store = Arc::clone(&store);
        let ids: Vec<_> = seeded.iter().take(5).map(|e| e.id.clone()).collect();
        thread::spawn(move || {
            for id in ids {
                store.delete(&id).unwrap();
            }
        })
    };
    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for n in 0..5 {
                store.create(day(2), format!("new {}", n)).unwrap();
            }
        })
    };
    deleter.join().unwrap();
    writer.join().unwrap();

    let entries = store.load_all();
    assert_eq!(entries.len(), 10);
    assert_eq!(store.find_by_date(day(2)).len(), 5);
}
