//! SQLite storage backend.
//!
//! Entries live in a single `mood_entries` table. `save_all` replaces the
//! table contents inside one transaction, so a failed write rolls back to
//! the previous snapshot.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::entry::MoodEntry;
use crate::error::{MoodError, Result};
use crate::fs::corrupt_backup_path;
use crate::storage::traits::SnapshotStore;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS mood_entries (
        id TEXT PRIMARY KEY,
        mood_index INTEGER,
        text TEXT NOT NULL DEFAULT '',
        date TEXT NOT NULL
    );
"#;

/// SQLite-backed snapshot store.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

/// Raw row as stored, before parsing ids and timestamps.
struct EntryRow {
    id: String,
    mood_index: Option<i64>,
    text: String,
    date: String,
}

impl EntryRow {
    fn into_entry(self) -> Result<MoodEntry> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| MoodError::Storage(format!("Invalid entry id {}: {}", self.id, e)))?;
        let mood_index = match self.mood_index {
            Some(value) => Some(usize::try_from(value).map_err(|_| {
                MoodError::Storage(format!("Invalid mood index {} for entry {}", value, id))
            })?),
            None => None,
        };
        let timestamp = DateTime::parse_from_rfc3339(&self.date)
            .map_err(|e| MoodError::Storage(format!("Invalid date for entry {}: {}", id, e)))?
            .with_timezone(&Utc);
        Ok(MoodEntry {
            id,
            mood_index,
            text: self.text,
            timestamp,
        })
    }
}

impl SqliteStore {
    /// Open (or create) a database file.
    ///
    /// A file that is not a SQLite database is moved to `<name>.corrupt`
    /// and a fresh database is created in its place.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = match open_with_schema(path) {
            Err(rusqlite::Error::SqliteFailure(err, _)) if err.code == ErrorCode::NotADatabase => {
                let backup = corrupt_backup_path(path);
                std::fs::rename(path, &backup)?;
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    "journal is not a SQLite database; moved it aside"
                );
                open_with_schema(path)?
            }
            other => other?,
        };
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    /// In-memory database, mostly for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { path: None, conn })
    }
}

fn open_with_schema(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

impl SnapshotStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<MoodEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, mood_index, text, date FROM mood_entries ORDER BY date DESC")?;
        let rows = stmt.query_map([], |row| {
            Ok(EntryRow {
                id: row.get(0)?,
                mood_index: row.get(1)?,
                text: row.get(2)?,
                date: row.get(3)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            // Unreadable rows are skipped, not fatal.
            match row.map_err(MoodError::from).and_then(EntryRow::into_entry) {
                Ok(entry) => entries.push(entry),
                Err(err) => warn!(error = %err, "skipping unreadable row"),
            }
        }
        Ok(entries)
    }

    fn save_all(&mut self, entries: &[MoodEntry]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM mood_entries", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO mood_entries (id, mood_index, text, date) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for entry in entries {
                let mood_index = entry.mood_index.map(|i| i as i64);
                insert.execute(params![
                    entry.id.to_string(),
                    mood_index,
                    entry.text,
                    entry.timestamp.to_rfc3339(),
                ])?;
            }
        }
        tx.commit()?;
        debug!(count = entries.len(), "sqlite snapshot written");
        Ok(())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_in_memory_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let entries = vec![
            MoodEntry::new(None, "", Utc::now()),
            MoodEntry::new(Some(4), "long day", Utc::now()),
        ];

        store.save_all(&entries).unwrap();
        let mut loaded = store.load_all().unwrap();
        loaded.sort_by_key(|e| e.id);
        let mut expected = entries.clone();
        expected.sort_by_key(|e| e.id);

        assert_eq!(loaded, expected);
    }

    #[test]
    fn test_save_replaces_previous_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.db");
        let mut store = SqliteStore::open(&path).unwrap();
        store
            .save_all(&[MoodEntry::new(Some(0), "first", Utc::now())])
            .unwrap();
        store.save_all(&[]).unwrap();

        let reopened = SqliteStore::open(&path).unwrap();
        assert!(reopened.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let good = MoodEntry::new(Some(2), "fine", Utc::now());
        store.save_all(std::slice::from_ref(&good)).unwrap();
        store
            .conn
            .execute(
                "INSERT INTO mood_entries (id, mood_index, text, date) VALUES ('nope', 1, '', 'x')",
                [],
            )
            .unwrap();

        assert_eq!(store.load_all().unwrap(), vec![good]);
    }

    #[test]
    fn test_non_database_file_is_moved_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.db");
        std::fs::write(&path, "not a database at all\n".repeat(200)).unwrap();

        let store = SqliteStore::open(&path).unwrap();

        assert!(store.load_all().unwrap().is_empty());
        let backup = corrupt_backup_path(&path);
        assert!(std::fs::read_to_string(backup)
            .unwrap()
            .starts_with("not a database"));
    }
}
