use moodlog_core::DayZone;

use crate::app::AppContext;
use crate::cli::QuoteArgs;
use crate::errors::CliError;
use crate::helpers::parse_day;
use crate::ui::theme::{styled, styles};
use crate::ui::{print, OutputMode};

pub fn handle_quote(ctx: &AppContext, args: &QuoteArgs) -> anyhow::Result<()> {
    // Quotes need only a day zone; an unconfigured journal falls back to local time.
    let zone = match ctx.settings() {
        Ok(settings) => settings.zone,
        Err(e) if e.downcast_ref::<CliError>().is_some_and(CliError::is_not_found) => {
            DayZone::Local
        }
        Err(e) => return Err(e),
    };
    let day = match args.date.as_deref() {
        Some(value) => parse_day(value, &zone)?,
        None => zone.today(),
    };
    let quote = ctx.quotes().quote_for_day(day).to_string();

    let ui_ctx = ctx.ui_context(args.json, None);
    match ui_ctx.mode {
        OutputMode::Json => {
            let output = serde_json::json!({ "day": day.to_string(), "quote": quote });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputMode::Plain => println!("{}", quote),
        OutputMode::Pretty => {
            let mark = if ui_ctx.unicode { "\u{201C}" } else { "\"" };
            print(&ui_ctx, &styled(mark, styles::dim(), ui_ctx.color));
            print(&ui_ctx, &format!("  {}", styled(&quote, styles::bold(), ui_ctx.color)));
        }
    }
    Ok(())
}
