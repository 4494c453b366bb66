use chrono::{Datelike, NaiveDate};
use moodlog_core::{CalendarGrid, GridSlot, Locale, MoodCatalog};

use crate::app::AppContext;
use crate::cli::CalendarArgs;
use crate::helpers::resolve_month;
use crate::ui::theme::{mood_marker, mood_style, note_marker, styled, styles};
use crate::ui::{header, print, OutputMode, UiContext};

const CELL_WIDTH: usize = 4;

pub fn handle_calendar(ctx: &AppContext, args: &CalendarArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let month = resolve_month(args.month.as_deref(), &settings.zone)?;
    let store = ctx.open_journal()?;
    let grid = CalendarGrid::build(month, settings.week_start, |day| store.find(day).cloned());
    let locale = ctx.locale()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    match ui_ctx.mode {
        OutputMode::Json => {
            let weekdays: Vec<&str> = grid
                .weekday_header()
                .iter()
                .map(|weekday| locale.weekday_short(*weekday))
                .collect();
            let mut output = serde_json::to_value(&grid)?;
            output["title"] = serde_json::json!(locale.month_title(month));
            output["weekdays"] = serde_json::json!(weekdays);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Plain => {
            for slot in grid.day_slots() {
                if let Some(day) = slot.day() {
                    let mood = slot
                        .entry()
                        .and_then(|entry| entry.mood_index)
                        .and_then(|index| settings.catalog.key(index))
                        .unwrap_or("-");
                    println!("{} {}", day, mood);
                }
            }
        }
        OutputMode::Pretty => {
            if !ctx.quiet() {
                print(&ui_ctx, &header(&ui_ctx, "calendar", None));
                print(&ui_ctx, "");
            }
            let today = settings.zone.today();
            for line in render_grid(&ui_ctx, &grid, &settings.catalog, locale.as_ref(), today) {
                print(&ui_ctx, &line);
            }
            if !ctx.quiet() {
                print(&ui_ctx, "");
                print(&ui_ctx, &legend(&ui_ctx, &settings.catalog, locale.as_ref()));
            }
        }
    }
    Ok(())
}

/// Title, weekday header and one line per week.
fn render_grid(
    ui: &UiContext,
    grid: &CalendarGrid,
    catalog: &MoodCatalog,
    locale: &dyn Locale,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = Vec::new();
    let title = locale.month_title(grid.month());
    let width = CELL_WIDTH * 7;
    let padding = width.saturating_sub(title.chars().count()) / 2;
    lines.push(format!(
        "{}{}",
        " ".repeat(padding),
        styled(&title, styles::bold(), ui.color)
    ));

    let weekdays: String = grid
        .weekday_header()
        .iter()
        .map(|weekday| format!("{:>width$}", locale.weekday_short(*weekday), width = CELL_WIDTH - 1))
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(styled(&weekdays, styles::dim(), ui.color));

    for row in grid.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| render_cell(ui, slot, catalog, today))
            .collect();
        lines.push(cells.join(" ").trim_end().to_string());
    }
    lines
}

/// Day number plus a one-character mood marker, padded to the cell width.
fn render_cell(ui: &UiContext, slot: &GridSlot, catalog: &MoodCatalog, today: NaiveDate) -> String {
    let Some(day) = slot.day() else {
        return " ".repeat(CELL_WIDTH - 1);
    };
    let number = format!("{:>2}", day.day());
    let number = if day == today {
        styled(&number, styles::bold(), ui.color)
    } else {
        number
    };

    let marker = match slot.entry() {
        Some(entry) => match entry.mood_index {
            Some(index) => {
                let marker = catalog.key(index).map(mood_marker).unwrap_or_else(|| "?".to_string());
                styled(&marker, mood_style(index), ui.color)
            }
            None if !entry.text.is_empty() => note_marker(ui.unicode).to_string(),
            None => " ".to_string(),
        },
        None => " ".to_string(),
    };
    format!("{}{}", number, marker)
}

fn legend(ui: &UiContext, catalog: &MoodCatalog, locale: &dyn Locale) -> String {
    let mut parts: Vec<String> = catalog
        .iter()
        .map(|(index, key)| {
            let marker = styled(&mood_marker(key), mood_style(index), ui.color);
            format!("{} {}", marker, locale.mood_name(key))
        })
        .collect();
    parts.push(format!("{} note", note_marker(ui.unicode)));
    parts.join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc, Weekday};
    use moodlog_core::{English, MoodEntry, Month};

    fn ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_render_grid_layout() {
        let month = Month::new(2024, 9).unwrap();
        let grid = CalendarGrid::build(month, Weekday::Mon, |day| {
            (day.day() == 1).then(|| {
                MoodEntry::new(Some(3), "", Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap())
            })
        });
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();

        let lines = render_grid(&ctx(), &grid, &MoodCatalog::default(), &English, today);

        assert_eq!(lines[0].trim(), "September 2024");
        assert_eq!(lines[1], " Mo  Tu  We  Th  Fr  Sa  Su");
        // September 2024 starts on a Sunday: six blank cells, then day 1.
        assert_eq!(lines[2], format!("{} 1H", "    ".repeat(6)));
        assert_eq!(lines[3], " 2   3   4   5   6   7   8");
        assert_eq!(lines.len(), 2 + 6);
    }

    #[test]
    fn test_note_only_day_gets_note_marker() {
        let entry = MoodEntry::new(None, "note", Utc.with_ymd_and_hms(2024, 9, 2, 12, 0, 0).unwrap());
        let slot = GridSlot::Day {
            day: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            entry: Some(entry),
        };
        let today = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
        assert_eq!(render_cell(&ctx(), &slot, &MoodCatalog::default(), today), " 2*");
    }

    #[test]
    fn test_legend_lists_moods() {
        let legend = legend(&ctx(), &MoodCatalog::default(), &English);
        assert!(legend.starts_with("S Sad  A Angry  C Calm  H Happy  T Tired"));
    }
}
