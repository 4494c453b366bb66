//! Daily quote selection.

use chrono::{Datelike, NaiveDate};

use crate::error::{MoodError, Result};

/// The built-in quote book.
pub const DEFAULT_QUOTES: [&str; 28] = [
    "Варто тільки повірити, що ви можете — і ви вже на півдорозі до цілі",
    "Все приходить до того, хто вміє чекати.",
    "Кожен день — нова можливість.",
    "Ти сильніший, ніж думаєш.",
    "Усміхнись — і світ усміхнеться тобі.",
    "Сьогодні — найкращий день, щоб почати щось нове.",
    "Маленькі кроки ведуть до великих змін.",
    "Іноді найкраще, що ти можеш зробити — це просто продовжувати.",
    "Навіть маленький промінь світла розганяє темряву.",
    "Ти заслуговуєш на спокій, любов і турботу.",
    "Погані дні минають — а твоя сила залишається.",
    "Дбай про себе так само, як піклуєшся про інших.",
    "Ніхто не ідеальний, і це нормально.",
    "Те, що сьогодні здається важким, завтра стане твоєю перемогою.",
    "Навіть найменше кошеня іноді реве, як лев — і ти теж можеш.",
    "Коти не здаються — вони просто дрімають і повертаються сильнішими.",
    "Ідеальний момент не завжди приходить — зате приходить енергія діяти.",
    "Крок за кроком, день за днем — і ти вже зовсім інша людина.",
    "Не забувай муркотіти про свої перемоги — навіть маленькі.",
    "Іноді найкращий план — зупинитися, глибоко вдихнути і продовжити.",
    "Твоя історія не закінчується тут — попереду ще багато світла.",
    "Коли життя шипить — нагадуй собі, що ти тигр, а не миша.",
    "Ти не повинен бути ідеальним, щоб бути цінним.",
    "М'яко до себе — ти робиш усе, що можеш, і цього достатньо.",
    "Темні дні не назавжди — свято світла вже на підході.",
    "Зупинись, потягнись, видихни — інколи це і є шлях вперед.",
    "Внутрішній спокій — це теж успіх.",
    "Якщо в тебе сьогодні мало сил — добре. Відпочинок теж частина шляху.",
];

/// Picks one quote per calendar day, cycling through the book by day of year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSelector {
    quotes: Vec<String>,
}

impl Default for QuoteSelector {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }
}

impl QuoteSelector {
    /// Use a custom quote book.
    ///
    /// # Errors
    ///
    /// `MoodError::Validation` if `quotes` is empty.
    pub fn new<I, Q>(quotes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        let quotes: Vec<String> = quotes.into_iter().map(Into::into).collect();
        if quotes.is_empty() {
            return Err(MoodError::Validation(
                "Quote book cannot be empty".to_string(),
            ));
        }
        Ok(Self { quotes })
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quote for a calendar day: `quotes[(day_of_year - 1) % len]`.
    pub fn quote_for_day(&self, date: NaiveDate) -> &str {
        let slot = date.ordinal0() as usize % self.quotes.len();
        &self.quotes[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_year_gets_first_quote() {
        let selector = QuoteSelector::default();
        assert_eq!(selector.quote_for_day(date(2025, 1, 1)), DEFAULT_QUOTES[0]);
    }

    #[test]
    fn test_cycles_through_book() {
        let selector = QuoteSelector::default();
        // Day 29 wraps back to the first quote.
        assert_eq!(selector.quote_for_day(date(2025, 1, 29)), DEFAULT_QUOTES[0]);
        assert_eq!(selector.quote_for_day(date(2025, 1, 28)), DEFAULT_QUOTES[27]);
    }

    #[test]
    fn test_leap_day_ordinal() {
        let selector = QuoteSelector::new(["a", "b", "c"]).unwrap();
        // 2024-03-01 is day 61 of a leap year.
        assert_eq!(selector.quote_for_day(date(2024, 3, 1)), "a");
        // 2025-03-01 is day 60.
        assert_eq!(selector.quote_for_day(date(2025, 3, 1)), "c");
    }

    #[test]
    fn test_same_day_same_quote() {
        let selector = QuoteSelector::default();
        let day = date(2024, 7, 19);
        assert_eq!(selector.quote_for_day(day), selector.quote_for_day(day));
    }

    #[test]
    fn test_empty_book_rejected() {
        let result = QuoteSelector::new(Vec::<String>::new());
        assert!(matches!(result, Err(MoodError::Validation(_))));
    }
}
