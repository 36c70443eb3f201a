//! Integration tests for file-backed persistence.
//!
//! The registry writes through the store adapter after every mutation;
//! these tests verify reload round-trips, corrupt-data fallbacks, and
//! clear-all semantics against a real directory.

use tickstack_core::{FileStore, TimerRegistry, TimerStatus, KEY_TIMERS};

#[test]
fn registry_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let (running_id, done_id) = {
        let mut reg = TimerRegistry::open(FileStore::new(dir.path()));
        let running = reg.create("Long", 100, "Work", true).unwrap().id;
        let done = reg.create("Quick", 2, "Home", false).unwrap().id;
        reg.start(running);
        reg.start(done);
        reg.tick();
        reg.tick();
        (running, done)
    };

    let reg = TimerRegistry::open(FileStore::new(dir.path()));
    assert_eq!(reg.timers().len(), 2);

    let running = reg.get(running_id).unwrap();
    assert_eq!(running.status, TimerStatus::Running);
    assert_eq!(running.remaining, 98);
    assert!(running.halfway_alert);

    let done = reg.get(done_id).unwrap();
    assert_eq!(done.status, TimerStatus::Completed);
    assert_eq!(done.remaining, 0);

    assert_eq!(reg.history().len(), 1);
    assert_eq!(reg.history()[0].name, "Quick");
}

#[test]
fn corrupt_timers_blob_falls_back_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(format!("{KEY_TIMERS}.json")),
        "{definitely not json",
    )
    .unwrap();

    let reg = TimerRegistry::open(FileStore::new(dir.path()));
    assert!(reg.timers().is_empty());
    assert!(reg.history().is_empty());
}

#[test]
fn clear_all_removes_blobs_and_reopens_empty() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut reg = TimerRegistry::open(FileStore::new(dir.path()));
        let id = reg.create("Quick", 1, "Work", false).unwrap().id;
        reg.start(id);
        reg.tick();
        assert_eq!(reg.history().len(), 1);
        reg.clear_all();
    }

    assert!(!dir.path().join("timers.json").exists());
    assert!(!dir.path().join("timer_history.json").exists());

    let reg = TimerRegistry::open(FileStore::new(dir.path()));
    assert!(reg.timers().is_empty());
    assert!(reg.history().is_empty());
}

#[test]
fn timestamps_persist_as_iso_8601_strings() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut reg = TimerRegistry::open(FileStore::new(dir.path()));
        reg.create("Focus", 60, "Work", false).unwrap();
    }

    let blob = std::fs::read_to_string(dir.path().join("timers.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let created_at = value[0]["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
}

#[test]
fn export_snapshot_is_not_written_to_storage() {
    let dir = tempfile::tempdir().unwrap();
    let mut reg = TimerRegistry::open(FileStore::new(dir.path()));
    reg.create("Focus", 60, "Work", false).unwrap();

    let before: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    let json = reg.export_snapshot().unwrap();
    assert!(json.contains("exportedAt"));

    let after: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(before.len(), after.len());
}
