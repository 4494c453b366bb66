//! Parsing helpers for the CLI.
//!
//! Dates, months, weekdays, moods and output formats given on the
//! command line or in the config file.

mod parsing;

pub use parsing::{
    parse_datetime, parse_day, parse_mood, parse_output_format, parse_weekday, resolve_month,
    DayAnchor, OutputFormat,
};
