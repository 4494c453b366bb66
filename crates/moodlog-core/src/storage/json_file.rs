//! Flat JSON file backend.
//!
//! The file holds a pretty-printed JSON array of entry records. Writes go
//! through a synced temp file and an atomic rename.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entry::MoodEntry;
use crate::error::{MoodError, Result};
use crate::fs::{corrupt_backup_path, write_atomic};
use crate::storage::traits::SnapshotStore;

/// JSON snapshot file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable snapshot is copied before it can be overwritten.
    pub fn corrupt_backup_path(&self) -> PathBuf {
        corrupt_backup_path(&self.path)
    }
}

impl SnapshotStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<MoodEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot on disk yet");
                return Ok(Vec::new());
            }
            Err(err) => {
                return Err(MoodError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice::<Vec<MoodEntry>>(&bytes).map_err(|err| {
            let backup = self.corrupt_backup_path();
            match fs::copy(&self.path, &backup) {
                Ok(_) => warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "snapshot is corrupt; kept a copy"
                ),
                Err(copy_err) => warn!(
                    path = %self.path.display(),
                    error = %copy_err,
                    "snapshot is corrupt and could not be copied aside"
                ),
            }
            MoodError::Storage(format!("Corrupt snapshot {}: {}", self.path.display(), err))
        })
    }

    fn save_all(&mut self, entries: &[MoodEntry]) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), count = entries.len(), "snapshot written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("journal.json"));
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("journal.json"));
        let entries = vec![MoodEntry::new(Some(2), "calm", Utc::now())];

        store.save_all(&entries).unwrap();

        assert_eq!(store.load_all().unwrap(), entries);
    }

    #[test]
    fn test_corrupt_file_errors_and_is_backed_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journal.json");
        fs::write(&path, b"{not json").unwrap();
        let store = JsonFileStore::new(&path);

        let result = store.load_all();

        assert!(matches!(result, Err(MoodError::Storage(_))));
        assert_eq!(
            fs::read(store.corrupt_backup_path()).unwrap(),
            b"{not json".to_vec()
        );
    }
}
