//! Snapshot storage trait definition.
//!
//! The `SnapshotStore` trait is the persistence boundary of the journal.
//! Backends read and write the whole entry collection at once; the entry
//! store decides when to call them.

use crate::entry::MoodEntry;
use crate::error::Result;

/// Whole-collection persistence for mood entries.
///
/// All implementations must ensure:
/// - `load_all` on a backend that was never written returns an empty list
/// - `save_all` replaces the previous snapshot completely
/// - a `save_all` followed by `load_all` reproduces equal entries
pub trait SnapshotStore {
    /// Read every persisted entry.
    ///
    /// # Errors
    ///
    /// Returns `MoodError::Storage` if the snapshot exists but cannot be
    /// read or decoded.
    fn load_all(&self) -> Result<Vec<MoodEntry>>;

    /// Replace the persisted snapshot with `entries`.
    ///
    /// # Errors
    ///
    /// Returns `MoodError::Storage` if the write fails. A failed write leaves
    /// the previous snapshot intact.
    fn save_all(&mut self, entries: &[MoodEntry]) -> Result<()>;

    /// Short human-readable description (path or backend name).
    fn describe(&self) -> String;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load_all(&self) -> Result<Vec<MoodEntry>> {
        (**self).load_all()
    }

    fn save_all(&mut self, entries: &[MoodEntry]) -> Result<()> {
        (**self).save_all(entries)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxed_store_delegates() {
        let mut boxed: Box<dyn SnapshotStore> = Box::new(crate::storage::MemoryStore::new());
        boxed.save_all(&[]).unwrap();
        assert!(boxed.load_all().unwrap().is_empty());
        assert_eq!(boxed.describe(), "memory");
    }
}
