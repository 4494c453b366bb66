use chrono::{DateTime, Utc};
use moodlog_core::TimeRange;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::errors::CliError;
use crate::helpers::{parse_datetime, parse_output_format, resolve_month, DayAnchor};
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let format = parse_output_format(args.format.as_deref())?;

    let range = match args.month.as_deref() {
        Some(value) => resolve_month(Some(value), &settings.zone)?.range(&settings.zone),
        None => {
            let start = args
                .since
                .as_deref()
                .map(|value| parse_datetime(value, &settings.zone, DayAnchor::Start))
                .transpose()?
                .unwrap_or(DateTime::<Utc>::MIN_UTC);
            let end = args
                .until
                .as_deref()
                .map(|value| parse_datetime(value, &settings.zone, DayAnchor::End))
                .transpose()?
                .unwrap_or(DateTime::<Utc>::MAX_UTC);
            if end < start {
                return Err(CliError::invalid_input("--until is before --since").into());
            }
            TimeRange::new(start, end)
        }
    };

    let store = ctx.open_journal()?;
    let mut entries = store.list(&range);
    entries.truncate(args.limit.unwrap_or(DEFAULT_LIST_LIMIT));

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let locale = ctx.locale()?;
    print_entry_list(
        &ui_ctx,
        &entries,
        settings,
        locale.as_ref(),
        format,
        ctx.quiet(),
    )
}
