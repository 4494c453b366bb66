//! Calendar-day bucketing.
//!
//! Every "same day" question in the crate goes through [`DayZone`], so the
//! day boundary is local midnight in one consistently chosen zone rather
//! than a rolling 24h window.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, Duration, Local, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::{MoodError, Result};

/// The zone whose midnight separates calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayZone {
    /// The device's local time zone.
    #[default]
    Local,
    /// A fixed IANA zone (e.g. "Europe/Kyiv").
    Named(Tz),
}

impl DayZone {
    /// Parse a zone name. Empty, "auto" and "local" select the device zone.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("auto")
            || trimmed.eq_ignore_ascii_case("local")
        {
            return Ok(Self::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| MoodError::Config(format!("Invalid timezone: {}", trimmed)))
    }

    /// The calendar day a timestamp falls on.
    pub fn day_of(&self, ts: &DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => ts.with_timezone(&Local).date_naive(),
            Self::Named(tz) => ts.with_timezone(tz).date_naive(),
        }
    }

    /// Whether two timestamps fall on the same calendar day.
    pub fn same_day(&self, a: &DateTime<Utc>, b: &DateTime<Utc>) -> bool {
        self.day_of(a) == self.day_of(b)
    }

    /// The first instant of `date` in this zone.
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        match self {
            Self::Local => zone_midnight(&Local, date),
            Self::Named(tz) => zone_midnight(tz, date),
        }
    }

    /// Today's calendar day.
    pub fn today(&self) -> NaiveDate {
        self.day_of(&Utc::now())
    }
}

impl fmt::Display for DayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Named(tz) => write!(f, "{}", tz),
        }
    }
}

// Midnight can fall into a DST gap in a few zones; step forward until the
// local time exists.
fn zone_midnight<Z: TimeZone>(zone: &Z, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..=3)
        .find_map(|hours| {
            zone.from_local_datetime(&(midnight + Duration::hours(hours)))
                .earliest()
        })
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Every instant, for "all entries" queries.
    pub fn all() -> Self {
        Self {
            start: DateTime::<Utc>::MIN_UTC,
            end: DateTime::<Utc>::MAX_UTC,
        }
    }

    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        *ts >= self.start && *ts < self.end
    }
}

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    first: NaiveDate,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| MoodError::Validation(format!("Invalid month: {}-{}", year, month)))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date - Duration::days(i64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1-based.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take(self.days_in_month() as usize)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The month before this one. Saturates at the calendar's lower bound.
    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// The month after this one. Saturates at the calendar's upper bound.
    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(*self)
    }

    /// The instants covered by this month in `zone`.
    pub fn range(&self, zone: &DayZone) -> TimeRange {
        let start = zone.start_of_day(self.first);
        let end = match self.first.checked_add_months(Months::new(1)) {
            Some(next) => zone.start_of_day(next),
            None => DateTime::<Utc>::MAX_UTC,
        };
        TimeRange::new(start, end)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for Month {
    type Err = MoodError;

    /// Parse `YYYY-MM`.
    fn from_str(value: &str) -> Result<Self> {
        let invalid = || MoodError::Validation(format!("Invalid month (expected YYYY-MM): {}", value));
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Month::new(year, month).map_err(|_| invalid())
    }
}
