use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{TimeZone, Utc};
use moodlog_core::{
    DayZone, EntryStore, JsonFileStore, MoodCatalog, MoodEntry, SnapshotStore, SqliteStore,
};

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str, extension: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.{}", prefix, std::process::id(), nanos, extension);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
        let mut backup = self.path.clone().into_os_string();
        backup.push(".corrupt");
        let _ = fs::remove_file(PathBuf::from(backup));
    }
}

fn utc() -> DayZone {
    DayZone::parse("UTC").expect("UTC should parse")
}

fn sample_entries() -> Vec<MoodEntry> {
    vec![
        MoodEntry::new(
            Some(3),
            "sunny walk",
            Utc.with_ymd_and_hms(2024, 4, 2, 18, 30, 0).unwrap(),
        ),
        MoodEntry::new(None, "", Utc.with_ymd_and_hms(2024, 4, 1, 7, 0, 0).unwrap()),
        MoodEntry::new(
            Some(0),
            "rainy",
            Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap(),
        ),
    ]
}

#[test]
fn test_json_round_trip_through_store() {
    let temp = TempFile::new("moodlog_json_round_trip", "json");

    let mut store = EntryStore::open(JsonFileStore::new(&temp.path), MoodCatalog::default(), utc());
    for entry in sample_entries() {
        store
            .upsert(entry.timestamp, entry.mood_index, &entry.text)
            .expect("upsert should succeed");
    }
    let before = store.all();

    let reopened = EntryStore::open(JsonFileStore::new(&temp.path), MoodCatalog::default(), utc());

    assert_eq!(reopened.all(), before);
    assert_eq!(reopened.len(), 3);
}

#[test]
fn test_json_file_uses_original_record_shape() {
    let temp = TempFile::new("moodlog_json_shape", "json");
    let mut backend = JsonFileStore::new(&temp.path);
    backend
        .save_all(&sample_entries()[..1])
        .expect("save should succeed");

    let raw = fs::read_to_string(&temp.path).expect("read should succeed");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let record = &value[0];

    assert!(record.get("id").is_some());
    assert_eq!(record["moodIndex"], 3);
    assert_eq!(record["text"], "sunny walk");
    assert!(record.get("date").is_some());
}

#[test]
fn test_corrupt_json_opens_empty_and_keeps_backup() {
    let temp = TempFile::new("moodlog_json_corrupt", "json");
    fs::write(&temp.path, "[{\"id\": 12").expect("write should succeed");

    let backend = JsonFileStore::new(&temp.path);
    let backup = backend.corrupt_backup_path();
    let store = EntryStore::open(backend, MoodCatalog::default(), utc());

    assert!(store.is_empty());
    assert!(backup.exists());
}

#[test]
fn test_sqlite_round_trip_through_store() {
    let temp = TempFile::new("moodlog_sqlite_round_trip", "db");

    let backend = SqliteStore::open(&temp.path).expect("open should succeed");
    let mut store = EntryStore::open(backend, MoodCatalog::default(), utc());
    for entry in sample_entries() {
        store
            .upsert(entry.timestamp, entry.mood_index, &entry.text)
            .expect("upsert should succeed");
    }
    let id = store.all()[0].id;
    assert!(store.delete(id).expect("delete should succeed"));
    let before = store.all();
    drop(store);

    let backend = SqliteStore::open(&temp.path).expect("reopen should succeed");
    let reopened = EntryStore::open(backend, MoodCatalog::default(), utc());

    assert_eq!(reopened.all(), before);
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_sqlite_bad_row_keeps_the_rest_of_the_journal() {
    let temp = TempFile::new("moodlog_sqlite_bad_row", "db");

    let backend = SqliteStore::open(&temp.path).expect("open should succeed");
    let mut store = EntryStore::open(backend, MoodCatalog::default(), utc());
    for day in 1..=10 {
        let at = Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap();
        store.upsert(at, Some(2), "").expect("upsert should succeed");
    }
    drop(store);

    let conn = rusqlite::Connection::open(&temp.path).expect("raw open should succeed");
    conn.execute(
        "INSERT INTO mood_entries (id, mood_index, text, date) VALUES (?1, 1, '', 'not-a-date')",
        [uuid::Uuid::new_v4().to_string()],
    )
    .expect("insert should succeed");
    drop(conn);

    let backend = SqliteStore::open(&temp.path).expect("reopen should succeed");
    let mut store = EntryStore::open(backend, MoodCatalog::default(), utc());
    assert_eq!(store.len(), 10);

    let at = Utc.with_ymd_and_hms(2024, 6, 11, 12, 0, 0).unwrap();
    store.upsert(at, Some(3), "").expect("upsert should succeed");
    drop(store);

    let backend = SqliteStore::open(&temp.path).expect("reopen should succeed");
    let reopened = EntryStore::open(backend, MoodCatalog::default(), utc());
    assert_eq!(reopened.len(), 11);
}

#[test]
fn test_sqlite_non_database_file_opens_empty_and_keeps_backup() {
    let temp = TempFile::new("moodlog_sqlite_not_db", "db");
    fs::write(&temp.path, "[{\"id\": \"this is a json journal\"}]\n".repeat(100))
        .expect("write should succeed");

    let backend = SqliteStore::open(&temp.path).expect("open should recover");
    let mut store = EntryStore::open(backend, MoodCatalog::default(), utc());
    assert!(store.is_empty());

    store
        .upsert(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(), Some(3), "")
        .expect("upsert should succeed");

    let mut backup = temp.path.clone().into_os_string();
    backup.push(".corrupt");
    let kept = fs::read_to_string(PathBuf::from(backup)).expect("backup should exist");
    assert!(kept.starts_with("[{\"id\""));
}
