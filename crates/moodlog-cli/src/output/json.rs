//! JSON output formatting for entries.

use moodlog_core::{DayZone, MoodCatalog, MoodEntry};

/// Convert an entry to JSON for output.
///
/// Adds the calendar day and mood key next to the stored fields.
pub fn entry_json(entry: &MoodEntry, catalog: &MoodCatalog, zone: &DayZone) -> serde_json::Value {
    let mood = entry.mood_index.and_then(|index| catalog.key(index));
    serde_json::json!({
        "id": entry.id,
        "day": zone.day_of(&entry.timestamp).to_string(),
        "mood_index": entry.mood_index,
        "mood": mood,
        "text": entry.text,
        "timestamp": entry.timestamp,
    })
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(
    entries: &[MoodEntry],
    catalog: &MoodCatalog,
    zone: &DayZone,
) -> Vec<serde_json::Value> {
    entries
        .iter()
        .map(|entry| entry_json(entry, catalog, zone))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_entry_json_fields() {
        let entry = MoodEntry::new(
            Some(3),
            "sunny",
            Utc.with_ymd_and_hms(2024, 5, 1, 22, 30, 0).unwrap(),
        );
        let zone = DayZone::parse("Europe/Kyiv").unwrap();

        let value = entry_json(&entry, &MoodCatalog::default(), &zone);

        assert_eq!(value["day"], "2024-05-02");
        assert_eq!(value["mood"], "happy");
        assert_eq!(value["mood_index"], 3);
        assert_eq!(value["text"], "sunny");
        assert_eq!(value["id"], entry.id.to_string());
    }

    #[test]
    fn test_entry_without_mood_has_null_mood() {
        let entry = MoodEntry::new(None, "note only", Utc::now());
        let value = entry_json(&entry, &MoodCatalog::default(), &DayZone::Local);
        assert!(value["mood"].is_null());
        assert!(value["mood_index"].is_null());
    }
}
