//! Day index: calendar date to the single entry id recorded on it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use uuid::Uuid;

/// Maps each calendar day to at most one entry id.
#[derive(Debug, Clone, Default)]
pub struct DayIndex {
    by_day: BTreeMap<NaiveDate, Uuid>,
}

impl DayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry id recorded on `day`, if any.
    pub fn get(&self, day: NaiveDate) -> Option<Uuid> {
        self.by_day.get(&day).copied()
    }

    /// Claim `day` for `id`, returning the id that held it before.
    pub fn insert(&mut self, day: NaiveDate, id: Uuid) -> Option<Uuid> {
        self.by_day.insert(day, id)
    }

    /// Release `day` only if it is held by `id`.
    pub fn remove(&mut self, day: NaiveDate, id: Uuid) -> bool {
        if self.by_day.get(&day) == Some(&id) {
            self.by_day.remove(&day);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.by_day.contains_key(&day)
    }

    pub fn len(&self) -> usize {
        self.by_day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_day.is_empty()
    }

    /// `(day, id)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Uuid)> + '_ {
        self.by_day.iter().map(|(day, id)| (*day, *id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_insert_replaces_and_reports_previous() {
        let mut index = DayIndex::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(index.insert(day(1), a), None);
        assert_eq!(index.insert(day(1), b), Some(a));
        assert_eq!(index.get(day(1)), Some(b));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_ignores_stale_owner() {
        let mut index = DayIndex::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        index.insert(day(2), a);
        assert!(!index.remove(day(2), b));
        assert!(index.contains(day(2)));
        assert!(index.remove(day(2), a));
        assert!(index.is_empty());
    }
}
