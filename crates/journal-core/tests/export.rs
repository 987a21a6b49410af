use std::fs;
use std::time::{Duration, Instant};

use journal_core::{Entry, FileStore, JournalError};
use tempfile::tempdir;

#[test]
fn test_export_writes_all_titles_and_contents() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    let entries = vec![
        Entry::new("Entry 1", "Content 1"),
        Entry::new("Entry 2", "Content 2"),
    ];
    let export_path = dir.path().join("export.txt");

    let task = store.create_export(&entries, &export_path);
    task.start().join().unwrap();

    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.contains("Entry 1"));
    assert!(exported.contains("Entry 2"));
    assert!(exported.contains("Content 1"));
    assert!(exported.contains("Content 2"));
    assert!(exported.contains("Title: Entry 1"));
    assert!(exported.contains("Content:\n"));
}

#[test]
fn test_export_overwrites_destination() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    let export_path = dir.path().join("export.txt");
    fs::write(&export_path, "stale export").unwrap();

    let task = store.create_export(&[Entry::new("Fresh", "New body")], &export_path);
    task.start().join().unwrap();

    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(!exported.contains("stale export"));
    assert!(exported.contains("New body"));
}

#[test]
fn test_export_snapshot_ignores_later_mutation() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    let mut entry = Entry::new("Snapshot", "Original body");
    let export_path = dir.path().join("export.txt");

    // Snapshot is taken at creation time; mutating afterwards must not
    // leak into the export.
    let task = store.create_export(std::slice::from_ref(&entry), &export_path);
    entry.set_content("Mutated body");
    task.start().join().unwrap();

    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.contains("Original body"));
    assert!(!exported.contains("Mutated body"));
}

#[test]
fn test_export_can_be_polled_to_completion() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    let export_path = dir.path().join("export.txt");

    let handle = store
        .create_export(&[Entry::new("Polled", "Body")], &export_path)
        .start();

    let deadline = Instant::now() + Duration::from_secs(10);
    while !handle.is_finished() {
        assert!(Instant::now() < deadline, "export did not finish in time");
        std::thread::sleep(Duration::from_millis(5));
    }
    handle.join().unwrap();
    assert!(export_path.exists());
}

#[test]
fn test_export_to_unwritable_destination_fails() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path().join("data")).unwrap();
    let bad_path = dir.path().join("missing-dir").join("export.txt");

    let result = store
        .create_export(&[Entry::new("Doomed", "Body")], &bad_path)
        .start()
        .join();
    assert!(matches!(result, Err(JournalError::ExportFailure(_))));
}
