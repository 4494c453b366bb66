//! Mood entry data model.
//!
//! `MoodEntry` serializes to the interchange record shape
//! `{"id", "moodIndex", "text", "date"}` used by every snapshot backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One mood/note record for a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier, assigned at creation and never changed
    pub id: Uuid,

    /// Selected mood category, `None` when no mood was chosen yet
    #[serde(rename = "moodIndex", default)]
    pub mood_index: Option<usize>,

    /// Free-form note, may be empty
    #[serde(default)]
    pub text: String,

    /// Effective date-time, used for day bucketing and ordering
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Create an entry with a fresh id.
    pub fn new(mood_index: Option<usize>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood_index,
            text: text.into(),
            timestamp,
        }
    }

    pub fn has_mood(&self) -> bool {
        self.mood_index.is_some()
    }
}

/// Mood change carried by an [`EntryEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodChange {
    #[default]
    Keep,
    Set(usize),
    Clear,
}

/// An explicit edit of an existing entry, applied through `EntryStore::update`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryEdit {
    pub mood: MoodChange,

    /// Replacement text; `Some("")` clears the note
    pub text: Option<String>,

    /// Move the entry to another instant (and possibly another day)
    pub timestamp: Option<DateTime<Utc>>,
}

impl EntryEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mood(mut self, index: usize) -> Self {
        self.mood = MoodChange::Set(index);
        self
    }

    pub fn clear_mood(mut self) -> Self {
        self.mood = MoodChange::Clear;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.mood == MoodChange::Keep && self.text.is_none() && self.timestamp.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_shape() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entry = MoodEntry::new(Some(3), "sunny walk", ts);
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["id"], serde_json::json!(entry.id.to_string()));
        assert_eq!(value["moodIndex"], serde_json::json!(3));
        assert_eq!(value["text"], serde_json::json!("sunny walk"));
        assert_eq!(value["date"], serde_json::json!("2024-05-01T08:30:00Z"));
    }

    #[test]
    fn test_record_null_mood_and_missing_text() {
        let raw = r#"{"id":"6f1c1f5e-3b1e-4d5a-9c1a-2b9b5f0a7e11","moodIndex":null,"date":"2024-05-01T08:30:00+03:00"}"#;
        let entry: MoodEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.mood_index, None);
        assert_eq!(entry.text, "");
        assert_eq!(entry.timestamp.to_rfc3339(), "2024-05-01T05:30:00+00:00");
    }

    #[test]
    fn test_edit_builder() {
        let edit = EntryEdit::new().mood(1).text("note");
        assert_eq!(edit.mood, MoodChange::Set(1));
        assert_eq!(edit.text.as_deref(), Some("note"));
        assert!(!edit.is_empty());
        assert!(EntryEdit::new().is_empty());
        assert_eq!(EntryEdit::new().mood(1).clear_mood().mood, MoodChange::Clear);
    }
}
