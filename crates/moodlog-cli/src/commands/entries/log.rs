use chrono::{DateTime, Utc};
use moodlog_core::DayZone;

use crate::app::AppContext;
use crate::cli::LogArgs;
use crate::errors::CliError;
use crate::helpers::{parse_datetime, parse_mood, DayAnchor};
use crate::output::{entry_json, mood_label};
use crate::ui::{print, receipt, short_id};

pub fn handle_log(ctx: &AppContext, args: &LogArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let mood = args
        .mood
        .as_deref()
        .map(|value| parse_mood(value, &settings.catalog))
        .transpose()?;
    let at = resolve_log_time(args.date.as_deref(), &settings.zone, Utc::now())?;
    let day = settings.zone.day_of(&at);

    let mut store = ctx.open_or_create_journal()?;
    let existed = store.find(day).is_some();
    let entry = store.upsert(at, mood, args.text.as_deref().unwrap_or(""))?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = entry_json(&entry, &settings.catalog, &settings.zone);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }
    if ctx.quiet() {
        println!("{}", entry.id);
        return Ok(());
    }

    let locale = ctx.locale()?;
    let title = if existed { "Updated entry" } else { "Logged entry" };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            title,
            &[
                ("ID", short_id(&entry.id)),
                ("Day", day.to_string()),
                (
                    "Mood",
                    mood_label(entry.mood_index, &settings.catalog, locale.as_ref()),
                ),
            ],
        ),
    );
    Ok(())
}

/// Instant to record for `--date`.
///
/// Without a date the entry is stamped now. A bare day is stamped at local
/// noon, clamped to now for today. Future days are refused.
pub(super) fn resolve_log_time(
    value: Option<&str>,
    zone: &DayZone,
    now: DateTime<Utc>,
) -> anyhow::Result<DateTime<Utc>> {
    let Some(value) = value else {
        return Ok(now);
    };
    let at = parse_datetime(value, zone, DayAnchor::Noon)?;
    if zone.day_of(&at) > zone.day_of(&now) {
        return Err(CliError::invalid_input(format!(
            "Cannot log a mood for a future day: {}",
            zone.day_of(&at)
        ))
        .into());
    }
    Ok(at.min(now))
}
