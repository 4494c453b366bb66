use crate::app::{resolve_entry_id, AppContext};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::parse_day;
use crate::ui::{print, receipt, short_id};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let mut store = ctx.open_journal()?;

    let (id, day) = match (&args.id, &args.date) {
        (Some(value), _) => {
            let id = resolve_entry_id(&store, value)?;
            let day = store
                .get(id)
                .map(|entry| settings.zone.day_of(&entry.timestamp));
            (id, day)
        }
        (None, Some(value)) => {
            let day = parse_day(value, &settings.zone)?;
            let entry = store.find(day).ok_or_else(|| {
                CliError::not_found(
                    format!("No entry recorded on {}", day),
                    "Hint: Run `moodlog list` to see recorded days.",
                )
            })?;
            (entry.id, Some(day))
        }
        (None, None) => {
            return Err(CliError::invalid_input("Pass an entry ID or --date").into());
        }
    };

    store.delete(id)?;

    let ui_ctx = ctx.ui_context(false, None);
    if ctx.quiet() {
        return Ok(());
    }
    let mut items = vec![("ID", short_id(&id))];
    if let Some(day) = day {
        items.push(("Day", day.to_string()));
    }
    print(&ui_ctx, &receipt(&ui_ctx, "Deleted entry", &items));
    Ok(())
}
