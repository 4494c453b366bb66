//! Entry store: the single owner of mood entries.
//!
//! The store enforces the one-entry-per-calendar-day invariant through its
//! [`DayIndex`] and writes the whole collection through the configured
//! [`SnapshotStore`] after every mutation. If that write fails, the
//! in-memory change is undone so memory and disk never disagree.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::day::{DayZone, Month, TimeRange};
use crate::entry::{EntryEdit, MoodChange, MoodEntry};
use crate::error::{MoodError, Result};
use crate::index::DayIndex;
use crate::mood::MoodCatalog;
use crate::storage::SnapshotStore;

/// In-memory journal backed by a snapshot store.
pub struct EntryStore<S: SnapshotStore> {
    backend: S,
    catalog: MoodCatalog,
    zone: DayZone,
    entries: HashMap<Uuid, MoodEntry>,
    index: DayIndex,
}

impl<S: SnapshotStore> EntryStore<S> {
    /// Seed a store from `backend.load_all()`.
    ///
    /// A missing or unreadable snapshot yields an empty store. Entries that
    /// would break the one-per-day invariant are dropped (newest wins), and
    /// out-of-range moods are cleared; both are logged.
    pub fn open(backend: S, catalog: MoodCatalog, zone: DayZone) -> Self {
        let loaded = match backend.load_all() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(
                    backend = %backend.describe(),
                    error = %err,
                    "could not load snapshot; starting with an empty journal"
                );
                Vec::new()
            }
        };

        let mut store = Self {
            backend,
            catalog,
            zone,
            entries: HashMap::new(),
            index: DayIndex::new(),
        };
        store.seed(loaded);
        info!(
            count = store.entries.len(),
            backend = %store.backend.describe(),
            "journal loaded"
        );
        store
    }

    fn seed(&mut self, mut loaded: Vec<MoodEntry>) {
        loaded.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        for mut entry in loaded {
            if let Some(index) = entry.mood_index {
                if self.catalog.validate(index).is_err() {
                    warn!(id = %entry.id, mood_index = index, "clearing out-of-range mood");
                    entry.mood_index = None;
                }
            }
            if self.entries.contains_key(&entry.id) {
                warn!(id = %entry.id, "dropping entry with duplicate id");
                continue;
            }
            let day = self.zone.day_of(&entry.timestamp);
            if self.index.contains(day) {
                warn!(id = %entry.id, %day, "dropping older entry on an already recorded day");
                continue;
            }
            self.index.insert(day, entry.id);
            self.entries.insert(entry.id, entry);
        }
    }

    /// Record a mood and/or note for the calendar day of `at`.
    ///
    /// If the day already has an entry, its mood is replaced when
    /// `mood_index` is given, its text when `text` is non-blank, and its
    /// timestamp becomes `at`. Otherwise a new entry is created.
    ///
    /// # Errors
    ///
    /// - `MoodError::Validation` if `mood_index` is out of range (nothing changes)
    /// - `MoodError::Storage` if the snapshot write fails (nothing changes)
    pub fn upsert(
        &mut self,
        at: DateTime<Utc>,
        mood_index: Option<usize>,
        text: &str,
    ) -> Result<MoodEntry> {
        if let Some(index) = mood_index {
            self.catalog.validate(index)?;
        }
        let text = text.trim();
        let day = self.zone.day_of(&at);

        match self.index.get(day) {
            Some(id) => {
                let previous = self.entries.get(&id).cloned().ok_or_else(|| {
                    MoodError::Storage(format!("Day index points at missing entry {}", id))
                })?;
                let mut updated = previous.clone();
                if let Some(index) = mood_index {
                    updated.mood_index = Some(index);
                }
                if !text.is_empty() {
                    updated.text = text.to_string();
                }
                updated.timestamp = at;

                self.entries.insert(id, updated.clone());
                self.write_through(move |store| {
                    store.entries.insert(id, previous);
                })?;
                debug!(%id, %day, "updated entry");
                Ok(updated)
            }
            None => {
                let entry = MoodEntry::new(mood_index, text, at);
                let id = entry.id;
                self.index.insert(day, id);
                self.entries.insert(id, entry.clone());
                self.write_through(move |store| {
                    store.entries.remove(&id);
                    store.index.remove(day, id);
                })?;
                debug!(%id, %day, "created entry");
                Ok(entry)
            }
        }
    }

    /// [`upsert`](Self::upsert) at the current instant.
    pub fn upsert_now(&mut self, mood_index: Option<usize>, text: &str) -> Result<MoodEntry> {
        self.upsert(Utc::now(), mood_index, text)
    }

    /// Apply an explicit edit to an existing entry.
    ///
    /// # Errors
    ///
    /// - `MoodError::Validation` if the new mood is out of range
    /// - `MoodError::NotFound` if `id` is unknown
    /// - `MoodError::Conflict` if the new timestamp lands on a day held by another entry
    /// - `MoodError::Storage` if the snapshot write fails
    pub fn update(&mut self, id: Uuid, edit: EntryEdit) -> Result<MoodEntry> {
        if let MoodChange::Set(index) = edit.mood {
            self.catalog.validate(index)?;
        }
        let previous = self
            .entries
            .get(&id)
            .cloned()
            .ok_or(MoodError::NotFound(id))?;
        let old_day = self.zone.day_of(&previous.timestamp);

        let mut updated = previous.clone();
        match edit.mood {
            MoodChange::Keep => {}
            MoodChange::Set(index) => updated.mood_index = Some(index),
            MoodChange::Clear => updated.mood_index = None,
        }
        if let Some(text) = edit.text {
            updated.text = text.trim().to_string();
        }
        if let Some(timestamp) = edit.timestamp {
            updated.timestamp = timestamp;
        }
        let new_day = self.zone.day_of(&updated.timestamp);
        let moved = new_day != old_day;

        if moved {
            if let Some(other) = self.index.get(new_day) {
                return Err(MoodError::Conflict(format!(
                    "{} already has entry {}",
                    new_day, other
                )));
            }
            self.index.remove(old_day, id);
            self.index.insert(new_day, id);
        }
        self.entries.insert(id, updated.clone());
        self.write_through(move |store| {
            if moved {
                store.index.remove(new_day, id);
                store.index.insert(old_day, id);
            }
            store.entries.insert(id, previous);
        })?;
        debug!(%id, %new_day, "edited entry");
        Ok(updated)
    }

    /// Remove an entry and release its day. Unknown ids are a no-op.
    ///
    /// Returns whether an entry was removed.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let Some(removed) = self.entries.remove(&id) else {
            debug!(%id, "delete of unknown entry ignored");
            return Ok(false);
        };
        let day = self.zone.day_of(&removed.timestamp);
        self.index.remove(day, id);
        self.write_through(move |store| {
            store.index.insert(day, id);
            store.entries.insert(id, removed);
        })?;
        debug!(%id, %day, "deleted entry");
        Ok(true)
    }

    /// The entry recorded on a calendar day.
    pub fn find(&self, day: NaiveDate) -> Option<&MoodEntry> {
        self.index.get(day).and_then(|id| self.entries.get(&id))
    }

    /// The entry on the same calendar day as `at`.
    pub fn find_at(&self, at: &DateTime<Utc>) -> Option<&MoodEntry> {
        self.find(self.zone.day_of(at))
    }

    pub fn get(&self, id: Uuid) -> Option<&MoodEntry> {
        self.entries.get(&id)
    }

    /// Entries with timestamps in `[range.start, range.end)`, newest first.
    pub fn list(&self, range: &TimeRange) -> Vec<MoodEntry> {
        let mut entries: Vec<MoodEntry> = self
            .entries
            .values()
            .filter(|entry| range.contains(&entry.timestamp))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(a.id.cmp(&b.id)));
        entries
    }

    /// Entries whose calendar day falls in `month`, newest first.
    pub fn list_month(&self, month: Month) -> Vec<MoodEntry> {
        self.list(&month.range(&self.zone))
    }

    /// Every entry, newest first.
    pub fn all(&self) -> Vec<MoodEntry> {
        self.list(&TimeRange::all())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn zone(&self) -> &DayZone {
        &self.zone
    }

    pub fn day_index(&self) -> &DayIndex {
        &self.index
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    fn write_through<F>(&mut self, rollback: F) -> Result<()>
    where
        F: FnOnce(&mut Self),
    {
        let snapshot = self.all();
        if let Err(err) = self.backend.save_all(&snapshot) {
            warn!(error = %err, "snapshot write failed; change rolled back");
            rollback(self);
            return Err(err);
        }
        Ok(())
    }
}
