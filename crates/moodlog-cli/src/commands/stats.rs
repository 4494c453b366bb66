use moodlog_core::{Locale, MonthlyStats, MoodCatalog, Month, Trend};

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::helpers::resolve_month;
use crate::output::mood_label;
use crate::ui::format::share_bar;
use crate::ui::{header, kv, print, table, Column, UiContext};

const BAR_WIDTH: usize = 20;

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let month = resolve_month(args.month.as_deref(), &settings.zone)?;
    let store = ctx.open_journal()?;
    let engine = ctx.stats_engine()?;

    let current = store.list_month(month);
    let previous = store.list_month(month.previous());
    let stats = engine.compute(&current, &previous);

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let mut output = serde_json::to_value(&stats)?;
        output["month"] = serde_json::json!(month);
        output["previous_month"] = serde_json::json!(month.previous());
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let locale = ctx.locale()?;
    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(
            &ui_ctx,
            &header(&ui_ctx, "stats", Some(&locale.month_title(month))),
        );
        print(&ui_ctx, "");
    }
    for line in summary_lines(&ui_ctx, &stats, month, &settings.catalog, locale.as_ref()) {
        print(&ui_ctx, &line);
    }
    if stats.entry_count > 0 && !ctx.quiet() {
        print(&ui_ctx, "");
        print(&ui_ctx, &distribution_table(&ui_ctx, &stats, locale.as_ref()));
    }
    Ok(())
}

fn summary_lines(
    ui: &UiContext,
    stats: &MonthlyStats,
    month: Month,
    catalog: &MoodCatalog,
    locale: &dyn Locale,
) -> Vec<String> {
    let mut lines = vec![kv(ui, "Entries", &stats.entry_count.to_string())];

    let comparison = match &stats.comparison {
        Some(c) => format!("{} {}", signed_percent(c.percentage), trend_arrow(c.trend, ui.unicode)),
        None => "no data".to_string(),
    };
    lines.push(kv(
        ui,
        &format!("vs {}", locale.month_title(month.previous())),
        &comparison,
    ));

    let streak = if ui.mode.is_pretty() {
        locale.streak_phrase(stats.positive_streak)
    } else {
        stats.positive_streak.to_string()
    };
    lines.push(kv(ui, "Positive streak", &streak));

    let most_common = match (&stats.most_common, ui.mode.is_pretty()) {
        (Some(m), true) => format!(
            "{} ({})",
            mood_label(Some(m.mood_index), catalog, locale),
            locale.days_phrase(m.count)
        ),
        (Some(m), false) => catalog.key(m.mood_index).unwrap_or("-").to_string(),
        (None, _) => "-".to_string(),
    };
    lines.push(kv(ui, "Most common", &most_common));
    lines
}

fn distribution_table(ui: &UiContext, stats: &MonthlyStats, locale: &dyn Locale) -> String {
    let columns = [
        Column::new("Mood"),
        Column::new("Days"),
        Column::new("Share"),
        Column::new(""),
    ];
    let rows: Vec<Vec<String>> = stats
        .distribution
        .iter()
        .map(|share| {
            vec![
                locale.mood_name(&share.key).to_string(),
                share.count.to_string(),
                format!("{:.0}%", share.share * 100.0),
                share_bar(share.share, BAR_WIDTH, ui.unicode),
            ]
        })
        .collect();
    table(ui, &columns, &rows)
}

fn signed_percent(percentage: i64) -> String {
    if percentage > 0 {
        format!("+{}%", percentage)
    } else {
        format!("{}%", percentage)
    }
}

fn trend_arrow(trend: Trend, unicode: bool) -> &'static str {
    match (trend, unicode) {
        (Trend::Up, true) => "\u{2191}",
        (Trend::Down, true) => "\u{2193}",
        (Trend::Neutral, true) => "\u{2192}",
        (Trend::Up, false) => "up",
        (Trend::Down, false) => "down",
        (Trend::Neutral, false) => "flat",
    }
}
