use chrono::Utc;
use moodlog_core::EntryEdit;

use crate::app::{resolve_entry_id, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::parse_mood;
use crate::output::{entry_json, mood_label};
use crate::ui::{print, receipt, short_id};

use super::log::resolve_log_time;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;

    let mut edit = EntryEdit::new();
    if let Some(value) = args.mood.as_deref() {
        edit = edit.mood(parse_mood(value, &settings.catalog)?);
    }
    if args.clear_mood {
        edit = edit.clear_mood();
    }
    if let Some(text) = args.text.as_deref() {
        edit = edit.text(text);
    }
    if let Some(value) = args.date.as_deref() {
        edit = edit.timestamp(resolve_log_time(Some(value), &settings.zone, Utc::now())?);
    }
    if edit.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "Nothing to edit",
            "Hint: Pass --mood, --clear-mood, --text or --date.",
        )
        .into());
    }

    let mut store = ctx.open_journal()?;
    let id = resolve_entry_id(&store, &args.id)?;
    let entry = store.update(id, edit)?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = entry_json(&entry, &settings.catalog, &settings.zone);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let locale = ctx.locale()?;
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Updated entry",
            &[
                ("ID", short_id(&entry.id)),
                ("Day", settings.zone.day_of(&entry.timestamp).to_string()),
                (
                    "Mood",
                    mood_label(entry.mood_index, &settings.catalog, locale.as_ref()),
                ),
            ],
        ),
    );
    Ok(())
}
