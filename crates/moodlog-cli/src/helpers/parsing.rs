//! Parsing helpers for dates, months, moods and output format.

use chrono::{DateTime, Duration, NaiveDate, Utc, Weekday};
use moodlog_core::{DayZone, MoodCatalog, Month};

use crate::errors::CliError;

/// Where a date-only value lands within its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAnchor {
    /// Local midnight at the start of the day.
    Start,
    /// Local noon, clear of any DST transition.
    Noon,
    /// Local midnight at the end of the day (exclusive upper bound).
    End,
}

/// Parse a datetime (ISO-8601) or a day (YYYY-MM-DD, today, yesterday).
///
/// Day values are placed in `zone` according to `anchor`.
pub fn parse_datetime(value: &str, zone: &DayZone, anchor: DayAnchor) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value.trim()) {
        return Ok(parsed.with_timezone(&Utc));
    }
    let day = parse_day(value, zone)?;
    Ok(match anchor {
        DayAnchor::Start => zone.start_of_day(day),
        DayAnchor::Noon => zone.start_of_day(day) + Duration::hours(12),
        DayAnchor::End => {
            let next = day.succ_opt().ok_or_else(|| {
                CliError::invalid_input(format!("Date is out of range: {}", day))
            })?;
            zone.start_of_day(next)
        }
    })
}

/// Parse a calendar day: YYYY-MM-DD, `today` or `yesterday`.
pub fn parse_day(value: &str, zone: &DayZone) -> anyhow::Result<NaiveDate> {
    let value = value.trim();
    match value.to_lowercase().as_str() {
        "today" => return Ok(zone.today()),
        "yesterday" => return Ok(zone.today() - Duration::days(1)),
        _ => {}
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!(
            "Invalid date (expected YYYY-MM-DD, ISO-8601, today or yesterday): {}",
            value
        ))
        .into()
    })
}

/// Parse `--month`, defaulting to the current month.
///
/// Months after the current one are rejected: there is nothing to show yet.
pub fn resolve_month(value: Option<&str>, zone: &DayZone) -> anyhow::Result<Month> {
    let current = Month::of(zone.today());
    let month = match value {
        None => return Ok(current),
        Some(v) => v
            .parse::<Month>()
            .map_err(|e| CliError::invalid_input(e.to_string()))?,
    };
    if month > current {
        return Err(CliError::invalid_input_with_hint(
            format!("Month {} is in the future", month),
            format!("Hint: The latest month available is {}.", current),
        )
        .into());
    }
    Ok(month)
}

/// Parse a weekday name or three-letter abbreviation.
pub fn parse_weekday(value: &str) -> anyhow::Result<Weekday> {
    value.trim().parse::<Weekday>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid week start: {} (expected a weekday such as monday or sunday)",
            value
        )
    })
}

/// Parse a mood key or index against the catalog.
pub fn parse_mood(value: &str, catalog: &MoodCatalog) -> anyhow::Result<usize> {
    catalog.parse(value).map_err(|e| {
        CliError::invalid_input_with_hint(
            e.to_string(),
            "Hint: Run `moodlog moods` to see mood keys and indices.",
        )
        .into()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}
