use std::path::PathBuf;

use moodlog_core::{DayZone, JsonFileStore, LocaleId, MoodError, SnapshotStore, SqliteStore};
use tracing::info;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::{BackendArg, InitArgs};
use crate::config::{default_journal_path, write_config, Backend, MoodlogConfig};
use crate::errors::CliError;
use crate::helpers::parse_weekday;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let cli = ctx.cli();
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    let requested = args.path.as_ref().or(cli.journal.as_ref()).map(PathBuf::from);
    let backend = match (args.backend, &requested) {
        (Some(BackendArg::Json), _) => Backend::Json,
        (Some(BackendArg::Sqlite), _) => Backend::Sqlite,
        (None, Some(path)) => Backend::from_path(path),
        (None, None) => Backend::Json,
    };
    let journal_path = match requested {
        Some(path) => path,
        None => default_journal_path(backend)?,
    };

    if let Some(value) = args.timezone.as_deref() {
        DayZone::parse(value).map_err(|e| CliError::invalid_input(e.to_string()))?;
    }
    if let Some(value) = args.week_start.as_deref() {
        parse_weekday(value).map_err(|e| CliError::invalid_input(e.to_string()))?;
    }
    let locale = cli
        .locale
        .as_deref()
        .map(|value| {
            value
                .parse::<LocaleId>()
                .map_err(|e: MoodError| CliError::invalid_input(e.to_string()))
        })
        .transpose()?;

    let config = MoodlogConfig::new(
        journal_path.clone(),
        backend,
        args.timezone.clone(),
        args.week_start.clone(),
        locale.map(|id| id.code().to_string()),
    );
    write_config(&config_path, &config)?;

    let created = !journal_path.exists();
    if created {
        match backend {
            Backend::Json => JsonFileStore::new(&journal_path).save_all(&[])?,
            Backend::Sqlite => {
                SqliteStore::open(&journal_path)?;
            }
        }
    }
    info!(
        config = %config_path.display(),
        journal = %journal_path.display(),
        created,
        "initialized journal"
    );

    let ui_ctx = ctx.ui_context(false, None);
    if ctx.quiet() {
        return Ok(());
    }
    let journal_status = if created { "created" } else { "existing" };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Journal ready",
            &[
                ("Config", config_path.display().to_string()),
                (
                    "Journal",
                    format!("{} ({})", journal_path.display(), journal_status),
                ),
                ("Backend", format!("{:?}", backend).to_lowercase()),
            ],
        ),
    );
    print(&ui_ctx, &hint(&ui_ctx, "Record today with `moodlog log --mood happy`."));
    Ok(())
}
