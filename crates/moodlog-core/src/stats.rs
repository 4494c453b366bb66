//! Monthly statistics over mood entries.
//!
//! Every computation is a pure function of the entries passed in, so the
//! same inputs always give the same [`MonthlyStats`].

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::day::DayZone;
use crate::entry::MoodEntry;
use crate::error::{MoodError, Result};
use crate::mood::{MoodCatalog, DEFAULT_POSITIVE};

/// Inputs shared by every statistic: the catalog, which moods count as
/// positive, and the zone that defines calendar days.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsConfig {
    catalog: MoodCatalog,
    positive: BTreeSet<usize>,
    zone: DayZone,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self::new(MoodCatalog::default(), DayZone::Local)
    }
}

impl StatsConfig {
    /// Config with the default positive subset, limited to the catalog's range.
    pub fn new(catalog: MoodCatalog, zone: DayZone) -> Self {
        let positive = DEFAULT_POSITIVE
            .iter()
            .copied()
            .filter(|&index| index < catalog.len())
            .collect();
        Self {
            catalog,
            positive,
            zone,
        }
    }

    /// Replace the positive subset.
    ///
    /// # Errors
    ///
    /// `MoodError::Config` if any index is outside the catalog.
    pub fn with_positive<I>(mut self, positive: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut set = BTreeSet::new();
        for index in positive {
            if index >= self.catalog.len() {
                return Err(MoodError::Config(format!(
                    "Positive mood {} is outside the catalog (0..{})",
                    index,
                    self.catalog.len()
                )));
            }
            set.insert(index);
        }
        self.positive = set;
        Ok(self)
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    pub fn positive(&self) -> &BTreeSet<usize> {
        &self.positive
    }

    pub fn zone(&self) -> &DayZone {
        &self.zone
    }

    pub fn is_positive(&self, mood_index: usize) -> bool {
        self.positive.contains(&mood_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Entry-count change between two months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthComparison {
    pub current: usize,
    pub previous: usize,
    /// Rounded half away from zero.
    pub percentage: i64,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MostCommon {
    pub mood_index: usize,
    pub count: usize,
}

/// One bar of the mood distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodShare {
    pub mood_index: usize,
    pub key: String,
    pub count: usize,
    /// `count / entry_count`, 0.0 for an empty month.
    pub share: f64,
}

/// Everything the dashboard shows for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub entry_count: usize,
    pub frequency: BTreeMap<usize, usize>,
    pub comparison: Option<MonthComparison>,
    pub positive_streak: usize,
    pub most_common: Option<MostCommon>,
    pub distribution: Vec<MoodShare>,
}

/// Computes [`MonthlyStats`] under a [`StatsConfig`].
#[derive(Debug, Clone, Default)]
pub struct StatisticsEngine {
    config: StatsConfig,
}

impl StatisticsEngine {
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    /// Count per mood index over entries that have a mood.
    ///
    /// Every catalog index is present, with 0 for unused moods.
    pub fn frequency(&self, entries: &[MoodEntry]) -> BTreeMap<usize, usize> {
        let mut counts: BTreeMap<usize, usize> =
            (0..self.config.catalog.len()).map(|i| (i, 0)).collect();
        for index in entries.iter().filter_map(|e| e.mood_index) {
            *counts.entry(index).or_insert(0) += 1;
        }
        counts
    }

    /// Compare entry counts of two months. `None` when the previous month
    /// has no entries.
    pub fn compare_counts(&self, current: usize, previous: usize) -> Option<MonthComparison> {
        if previous == 0 {
            return None;
        }
        let change = current as f64 - previous as f64;
        let percentage = (change / previous as f64 * 100.0).round() as i64;
        let trend = if current > previous {
            Trend::Up
        } else if current < previous {
            Trend::Down
        } else {
            Trend::Neutral
        };
        Some(MonthComparison {
            current,
            previous,
            percentage,
            trend,
        })
    }

    /// Longest run of consecutive calendar days with a positive mood.
    pub fn positive_streak(&self, entries: &[MoodEntry]) -> usize {
        let days: BTreeSet<NaiveDate> = entries
            .iter()
            .filter(|e| e.mood_index.is_some_and(|i| self.config.is_positive(i)))
            .map(|e| self.config.zone.day_of(&e.timestamp))
            .collect();
        longest_run(&days)
    }

    /// Mood with the highest count; ties go to the lowest index.
    pub fn most_common(&self, entries: &[MoodEntry]) -> Option<MostCommon> {
        let mut best: Option<MostCommon> = None;
        for (mood_index, count) in self.frequency(entries) {
            if count == 0 {
                continue;
            }
            if best.map_or(true, |b| count > b.count) {
                best = Some(MostCommon { mood_index, count });
            }
        }
        best
    }

    /// Count and share of each catalog mood.
    pub fn distribution(&self, entries: &[MoodEntry]) -> Vec<MoodShare> {
        let total = entries.len();
        let frequency = self.frequency(entries);
        self.config
            .catalog
            .iter()
            .map(|(mood_index, key)| {
                let count = frequency.get(&mood_index).copied().unwrap_or(0);
                let share = if total > 0 {
                    count as f64 / total as f64
                } else {
                    0.0
                };
                MoodShare {
                    mood_index,
                    key: key.to_string(),
                    count,
                    share,
                }
            })
            .collect()
    }

    /// All statistics for `current`, compared against `previous`.
    pub fn compute(&self, current: &[MoodEntry], previous: &[MoodEntry]) -> MonthlyStats {
        MonthlyStats {
            entry_count: current.len(),
            frequency: self.frequency(current),
            comparison: self.compare_counts(current.len(), previous.len()),
            positive_streak: self.positive_streak(current),
            most_common: self.most_common(current),
            distribution: self.distribution(current),
        }
    }
}

fn longest_run(days: &BTreeSet<NaiveDate>) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut last: Option<NaiveDate> = None;

    for &day in days {
        current = match last {
            Some(prev) if (day - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        last = Some(day);
    }
    longest
}
