use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::errors::CliError;
use crate::helpers::parse_day;
use crate::output::{entry_json, print_entry};
use crate::ui::{header, print};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let store = ctx.open_journal()?;

    let day = match args.date.as_deref() {
        Some(value) => parse_day(value, &settings.zone)?,
        None => settings.zone.today(),
    };
    let entry = store.find(day).ok_or_else(|| {
        CliError::not_found(
            format!("No entry recorded on {}", day),
            "Hint: Run `moodlog log --mood <MOOD>` to record one.",
        )
    })?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = entry_json(entry, &settings.catalog, &settings.zone);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let locale = ctx.locale()?;
    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "show", Some(&day.to_string())));
        print(&ui_ctx, "");
    }
    print_entry(&ui_ctx, entry, settings, locale.as_ref(), ctx.quiet());
    Ok(())
}
