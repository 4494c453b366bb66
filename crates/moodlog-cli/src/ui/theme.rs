//! Badges, mood colors and styling helpers.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Err => styles::red(),
        }
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn red() -> Style {
        Style::new().red()
    }
}

/// Apply `style` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// Color for a mood index in the default palette (sad, angry, calm, happy, tired).
pub fn mood_style(mood_index: usize) -> Style {
    match mood_index % 5 {
        0 => Style::new().blue(),
        1 => Style::new().red(),
        2 => Style::new().cyan(),
        3 => Style::new().green(),
        _ => Style::new().magenta(),
    }
}

/// One-character calendar marker for a mood key.
pub fn mood_marker(key: &str) -> String {
    key.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Marker for a day with a note but no mood.
pub fn note_marker(unicode: bool) -> &'static str {
    if unicode {
        "\u{2022}"
    } else {
        "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::Ok.display(false), "[OK]");
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("hello", styles::bold(), false), "hello");
        assert!(styled("hello", styles::bold(), true).contains("\x1b["));
    }

    #[test]
    fn test_mood_marker() {
        assert_eq!(mood_marker("happy"), "H");
        assert_eq!(mood_marker(""), "?");
    }
}
