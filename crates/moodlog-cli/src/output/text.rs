//! Text and table output formatting for entries.

use moodlog_core::{Locale, MoodCatalog, MoodEntry};

use crate::app::Settings;
use crate::helpers::OutputFormat;
use crate::ui::theme::{mood_style, styled};
use crate::ui::{
    format_timestamp, kv, print, short_id, simple_table, single_line, truncate, Column, OutputMode,
    UiContext,
};

use super::json::entries_json;

/// Display name for an entry's mood, or "-" when none is set.
pub fn mood_label(
    mood_index: Option<usize>,
    catalog: &MoodCatalog,
    locale: &dyn Locale,
) -> String {
    mood_index
        .and_then(|index| catalog.key(index))
        .map(|key| locale.mood_name(key).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Print a single entry in human-readable format.
pub fn print_entry(
    ui: &UiContext,
    entry: &MoodEntry,
    settings: &Settings,
    locale: &dyn Locale,
    quiet: bool,
) {
    let pretty = ui.mode.is_pretty();
    let mood = mood_label(entry.mood_index, &settings.catalog, locale);
    let mood = match entry.mood_index {
        Some(index) if pretty => styled(&mood, mood_style(index), ui.color),
        _ => mood,
    };

    if !quiet {
        print(ui, &kv(ui, "ID", &entry.id.to_string()));
        print(ui, &kv(ui, "Day", &settings.zone.day_of(&entry.timestamp).to_string()));
        print(
            ui,
            &kv(ui, "Logged", &format_timestamp(&entry.timestamp, &settings.zone, pretty)),
        );
    }
    print(ui, &kv(ui, "Mood", &mood));
    if !entry.text.is_empty() {
        if pretty {
            print(ui, "");
            print(ui, &entry.text);
        } else {
            print(ui, &kv(ui, "Text", &single_line(&entry.text)));
        }
    }
}

/// Print a list of entries as JSON, a table or plain rows.
pub fn print_entry_list(
    ui: &UiContext,
    entries: &[MoodEntry],
    settings: &Settings,
    locale: &dyn Locale,
    format: Option<OutputFormat>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ui.mode.is_json() {
        let output = entries_json(entries, &settings.catalog, &settings.zone);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            println!("No entries found.");
        }
        return Ok(());
    }

    let plain = matches!(format, Some(OutputFormat::Plain)) || ui.mode == OutputMode::Plain;
    let text_width = ui.width.saturating_sub(40).max(20);
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let day = settings.zone.day_of(&entry.timestamp).to_string();
            if plain {
                let mood = entry
                    .mood_index
                    .and_then(|index| settings.catalog.key(index))
                    .unwrap_or("-");
                vec![
                    entry.id.to_string(),
                    day,
                    mood.to_string(),
                    single_line(&entry.text),
                ]
            } else {
                vec![
                    short_id(&entry.id),
                    day,
                    mood_label(entry.mood_index, &settings.catalog, locale),
                    truncate(&single_line(&entry.text), text_width),
                ]
            }
        })
        .collect();

    let columns = [
        Column::new("ID"),
        Column::new("Day"),
        Column::new("Mood"),
        Column::new("Note"),
    ];
    println!("{}", simple_table(ui, &columns, &rows));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodlog_core::{English, Ukrainian};

    #[test]
    fn test_mood_label() {
        let catalog = MoodCatalog::default();
        assert_eq!(mood_label(Some(3), &catalog, &English), "Happy");
        assert_eq!(mood_label(Some(0), &catalog, &Ukrainian), "Сумний");
        assert_eq!(mood_label(None, &catalog, &English), "-");
        assert_eq!(mood_label(Some(9), &catalog, &English), "-");
    }
}
