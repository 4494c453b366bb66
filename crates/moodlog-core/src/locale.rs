//! Display names for months, weekdays and moods.
//!
//! Grid and statistics types are locale-agnostic; anything a person reads
//! is named through a [`Locale`].

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::day::Month;
use crate::error::{MoodError, Result};

pub trait Locale {
    /// Standalone month name, capitalized ("March", "Березень").
    fn month_name(&self, month: u32) -> &'static str;

    /// Two-letter weekday label for grid headers.
    fn weekday_short(&self, weekday: Weekday) -> &'static str;

    /// Display name of a mood key. Unknown keys fall back to the key itself.
    fn mood_name<'a>(&self, key: &'a str) -> &'a str;

    /// `"{n} day(s)"` with the right plural form.
    fn days_phrase(&self, count: usize) -> String;

    /// `"{n} day(s) in a row"` with the right plural form.
    fn streak_phrase(&self, count: usize) -> String;

    /// Title for a month view, e.g. "March 2024".
    fn month_title(&self, month: Month) -> String {
        format!("{} {}", self.month_name(month.month()), month.year())
    }
}

fn weekday_slot(weekday: Weekday) -> usize {
    weekday.num_days_from_monday() as usize
}

fn month_slot(month: u32) -> usize {
    (month.clamp(1, 12) - 1) as usize
}

#[derive(Debug, Clone, Copy, Default)]
pub struct English;

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

impl Locale for English {
    fn month_name(&self, month: u32) -> &'static str {
        EN_MONTHS[month_slot(month)]
    }

    fn weekday_short(&self, weekday: Weekday) -> &'static str {
        EN_WEEKDAYS[weekday_slot(weekday)]
    }

    fn mood_name<'a>(&self, key: &'a str) -> &'a str {
        match key {
            "sad" => "Sad",
            "angry" => "Angry",
            "calm" => "Calm",
            "happy" => "Happy",
            "tired" => "Tired",
            other => other,
        }
    }

    fn days_phrase(&self, count: usize) -> String {
        if count == 1 {
            "1 day".to_string()
        } else {
            format!("{} days", count)
        }
    }

    fn streak_phrase(&self, count: usize) -> String {
        format!("{} in a row", self.days_phrase(count))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ukrainian;

const UK_MONTHS: [&str; 12] = [
    "Січень",
    "Лютий",
    "Березень",
    "Квітень",
    "Травень",
    "Червень",
    "Липень",
    "Серпень",
    "Вересень",
    "Жовтень",
    "Листопад",
    "Грудень",
];

const UK_WEEKDAYS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Нд"];

/// день / дні / днів
fn uk_days_word(count: usize) -> &'static str {
    let last_two = count % 100;
    if (11..=14).contains(&last_two) {
        return "днів";
    }
    match count % 10 {
        1 => "день",
        2..=4 => "дні",
        _ => "днів",
    }
}

impl Locale for Ukrainian {
    fn month_name(&self, month: u32) -> &'static str {
        UK_MONTHS[month_slot(month)]
    }

    fn weekday_short(&self, weekday: Weekday) -> &'static str {
        UK_WEEKDAYS[weekday_slot(weekday)]
    }

    fn mood_name<'a>(&self, key: &'a str) -> &'a str {
        match key {
            "sad" => "Сумний",
            "angry" => "Злий",
            "calm" => "Спокійний",
            "happy" => "Щасливий",
            "tired" => "Втомлений",
            other => other,
        }
    }

    fn days_phrase(&self, count: usize) -> String {
        format!("{} {}", count, uk_days_word(count))
    }

    fn streak_phrase(&self, count: usize) -> String {
        format!("{} {} поспіль", count, uk_days_word(count))
    }
}

/// Locale selector as written in config and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocaleId {
    #[default]
    En,
    Uk,
}

impl LocaleId {
    pub fn locale(self) -> Box<dyn Locale> {
        match self {
            LocaleId::En => Box::new(English),
            LocaleId::Uk => Box::new(Ukrainian),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            LocaleId::En => "en",
            LocaleId::Uk => "uk",
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleId {
    type Err = MoodError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(LocaleId::En),
            "uk" | "ua" | "ukrainian" => Ok(LocaleId::Uk),
            other => Err(MoodError::Config(format!(
                "Unknown locale '{}' (expected en or uk)",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ukrainian_plural_forms() {
        let uk = Ukrainian;
        assert_eq!(uk.days_phrase(1), "1 день");
        assert_eq!(uk.days_phrase(3), "3 дні");
        assert_eq!(uk.days_phrase(5), "5 днів");
        assert_eq!(uk.days_phrase(11), "11 днів");
        assert_eq!(uk.days_phrase(14), "14 днів");
        assert_eq!(uk.days_phrase(21), "21 день");
        assert_eq!(uk.days_phrase(22), "22 дні");
        assert_eq!(uk.days_phrase(112), "112 днів");
        assert_eq!(uk.streak_phrase(2), "2 дні поспіль");
    }

    #[test]
    fn test_english_phrases() {
        assert_eq!(English.days_phrase(1), "1 day");
        assert_eq!(English.days_phrase(0), "0 days");
        assert_eq!(English.streak_phrase(3), "3 days in a row");
    }

    #[test]
    fn test_names() {
        let month = Month::new(2024, 3).unwrap();
        assert_eq!(English.month_title(month), "March 2024");
        assert_eq!(Ukrainian.month_title(month), "Березень 2024");
        assert_eq!(Ukrainian.weekday_short(Weekday::Sun), "Нд");
        assert_eq!(English.mood_name("calm"), "Calm");
        assert_eq!(Ukrainian.mood_name("custom"), "custom");
    }

    #[test]
    fn test_parse_locale_id() {
        assert_eq!("UK".parse::<LocaleId>().unwrap(), LocaleId::Uk);
        assert_eq!("en".parse::<LocaleId>().unwrap(), LocaleId::En);
        assert!("fr".parse::<LocaleId>().is_err());
    }
}
