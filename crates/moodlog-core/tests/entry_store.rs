use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Kyiv;
use moodlog_core::{
    DayZone, EntryEdit, EntryStore, MemoryStore, MoodCatalog, MoodError, Month, TimeRange,
};

fn kyiv_store() -> EntryStore<MemoryStore> {
    EntryStore::open(
        MemoryStore::new(),
        MoodCatalog::default(),
        DayZone::Named(Kyiv),
    )
}

fn kyiv(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Kyiv.with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_repeated_upserts_leave_one_entry_per_day() {
    let mut store = kyiv_store();
    let morning = kyiv(2024, 6, 3, 7, 0, 0);

    for (i, mood) in [0usize, 2, 4, 3].into_iter().enumerate() {
        store
            .upsert(morning + Duration::hours(i as i64 * 3), Some(mood), "")
            .expect("upsert should succeed");
    }

    assert_eq!(store.len(), 1);
    let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    assert_eq!(store.find(day).unwrap().mood_index, Some(3));
}

#[test]
fn test_day_boundary_follows_local_midnight() {
    let mut store = kyiv_store();
    let late = store
        .upsert(kyiv(2024, 6, 3, 23, 59, 59), Some(1), "late")
        .expect("upsert should succeed");
    let early = store
        .upsert(kyiv(2024, 6, 4, 0, 0, 0), Some(2), "early")
        .expect("upsert should succeed");

    assert_ne!(late.id, early.id);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_index_stays_exclusive_through_mixed_operations() {
    let mut store = kyiv_store();
    let start = kyiv(2024, 6, 1, 12, 0, 0);
    let mut ids = Vec::new();
    for day in 0..5 {
        let entry = store
            .upsert(start + Duration::days(day), Some(day as usize % 5), "")
            .expect("upsert should succeed");
        ids.push(entry.id);
    }

    store.delete(ids[1]).expect("delete should succeed");
    store
        .update(ids[0], EntryEdit::new().timestamp(start + Duration::days(1)))
        .expect("moving into a freed day should succeed");
    let clash = store.update(ids[2], EntryEdit::new().timestamp(start + Duration::days(3)));
    assert!(matches!(clash, Err(MoodError::Conflict(_))));
    store
        .upsert(start + Duration::days(9), Some(4), "later")
        .expect("upsert should succeed");

    let zone = *store.zone();
    let mut days: Vec<NaiveDate> = store.all().iter().map(|e| zone.day_of(&e.timestamp)).collect();
    let total = days.len();
    days.sort();
    days.dedup();
    assert_eq!(days.len(), total);
    assert_eq!(store.day_index().len(), store.len());
    for (day, id) in store.day_index().iter() {
        assert_eq!(zone.day_of(&store.get(id).unwrap().timestamp), day);
    }
}

#[test]
fn test_list_month_uses_local_bounds() {
    let mut store = kyiv_store();
    store
        .upsert(kyiv(2024, 5, 31, 23, 30, 0), Some(0), "may")
        .expect("upsert should succeed");
    store
        .upsert(kyiv(2024, 6, 1, 0, 30, 0), Some(3), "june")
        .expect("upsert should succeed");
    store
        .upsert(kyiv(2024, 6, 30, 23, 59, 59), Some(2), "end of june")
        .expect("upsert should succeed");

    let june = store.list_month(Month::new(2024, 6).unwrap());

    assert_eq!(june.len(), 2);
    assert_eq!(june[0].text, "end of june");
    assert_eq!(june[1].text, "june");
}

#[test]
fn test_list_empty_range() {
    let mut store = kyiv_store();
    let at = kyiv(2024, 6, 1, 9, 0, 0);
    store.upsert(at, Some(0), "").expect("upsert should succeed");

    assert!(store.list(&TimeRange::new(at, at)).is_empty());
    assert_eq!(store.list(&TimeRange::new(at, at + Duration::seconds(1))).len(), 1);
}

#[test]
fn test_invalid_mood_changes_nothing() {
    let mut store = kyiv_store();
    let entry = store
        .upsert(kyiv(2024, 6, 1, 9, 0, 0), Some(2), "kept")
        .expect("upsert should succeed");

    let result = store.update(entry.id, EntryEdit::new().mood(7).text("lost"));

    assert!(matches!(result, Err(MoodError::Validation(_))));
    assert_eq!(store.get(entry.id).unwrap().text, "kept");
    assert_eq!(store.backend().saves(), 1);
}
