//! In-memory snapshot backend.

use crate::entry::MoodEntry;
use crate::error::{MoodError, Result};
use crate::storage::traits::SnapshotStore;

/// Keeps the last saved snapshot in memory.
///
/// Counts writes and can be told to fail the next one, which makes it the
/// backend of choice for exercising write-through behavior in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Vec<MoodEntry>,
    saves: usize,
    fail_next_save: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, as if it had been loaded from disk.
    pub fn with_entries(entries: Vec<MoodEntry>) -> Self {
        Self {
            snapshot: entries,
            ..Self::default()
        }
    }

    /// The last saved snapshot.
    pub fn snapshot(&self) -> &[MoodEntry] {
        &self.snapshot
    }

    /// Number of successful `save_all` calls.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Make the next `save_all` fail with a storage error.
    pub fn fail_next_save(&mut self) {
        self.fail_next_save = true;
    }
}

impl SnapshotStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<MoodEntry>> {
        Ok(self.snapshot.clone())
    }

    fn save_all(&mut self, entries: &[MoodEntry]) -> Result<()> {
        if self.fail_next_save {
            self.fail_next_save = false;
            return Err(MoodError::Storage("simulated write failure".to_string()));
        }
        self.snapshot = entries.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
