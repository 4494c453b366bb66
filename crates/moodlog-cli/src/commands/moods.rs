use crate::app::AppContext;
use crate::cli::MoodsArgs;
use crate::ui::theme::{mood_marker, mood_style, styled};
use crate::ui::{print, simple_table, Column};

pub fn handle_moods(ctx: &AppContext, args: &MoodsArgs) -> anyhow::Result<()> {
    let settings = ctx.settings()?;
    let locale = ctx.locale()?;
    let engine = ctx.stats_engine()?;
    let config = engine.config();

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output: Vec<serde_json::Value> = settings
            .catalog
            .iter()
            .map(|(index, key)| {
                serde_json::json!({
                    "index": index,
                    "key": key,
                    "name": locale.mood_name(key),
                    "positive": config.is_positive(index),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let pretty = ui_ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = settings
        .catalog
        .iter()
        .map(|(index, key)| {
            let marker = if pretty {
                styled(&mood_marker(key), mood_style(index), ui_ctx.color)
            } else {
                mood_marker(key)
            };
            let positive = if config.is_positive(index) { "yes" } else { "no" };
            vec![
                index.to_string(),
                marker,
                key.to_string(),
                locale.mood_name(key).to_string(),
                positive.to_string(),
            ]
        })
        .collect();
    let columns = [
        Column::new("#"),
        Column::new(""),
        Column::new("Key"),
        Column::new("Name"),
        Column::new("Positive"),
    ];
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
