//! # Moodlog Core
//!
//! Core library for Moodlog, a daily mood journal: one entry per calendar
//! day, a month calendar, monthly statistics and a quote of the day.
//!
//! This crate holds the domain logic and storage abstractions,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **store**: entry store enforcing one entry per calendar day
//! - **calendar**: 7-column month grid
//! - **stats**: frequency, month comparison, positive streak, distribution
//! - **quotes**: quote of the day
//! - **storage**: snapshot backends (JSON file, SQLite, memory)
//! - **locale**: display names (English, Ukrainian)

pub mod calendar;
pub mod day;
pub mod entry;
pub mod error;
pub mod fs;
pub mod index;
pub mod locale;
pub mod mood;
pub mod quotes;
pub mod stats;
pub mod storage;
pub mod store;

pub use calendar::{CalendarGrid, GridSlot};
pub use day::{DayZone, Month, TimeRange};
pub use entry::{EntryEdit, MoodChange, MoodEntry};
pub use error::{MoodError, Result};
pub use index::DayIndex;
pub use locale::{English, Locale, LocaleId, Ukrainian};
pub use mood::MoodCatalog;
pub use quotes::QuoteSelector;
pub use stats::{MonthlyStats, StatisticsEngine, StatsConfig, Trend};
pub use storage::{JsonFileStore, MemoryStore, SnapshotStore, SqliteStore};
pub use store::EntryStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
