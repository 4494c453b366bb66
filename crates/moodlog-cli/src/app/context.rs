//! Application context for the Moodlog CLI.
//!
//! Bundles CLI arguments with lazily-loaded settings and opens the
//! journal on the configured backend.

use once_cell::unsync::OnceCell;
use tracing::info;

use moodlog_core::{
    EntryStore, JsonFileStore, Locale, QuoteSelector, SnapshotStore, SqliteStore,
    StatisticsEngine, StatsConfig,
};

use crate::cli::Cli;
use crate::config::Backend;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{missing_journal_message, INIT_HINT};
use super::settings::Settings;

/// The journal as commands see it, whatever the backend.
pub type Journal = EntryStore<Box<dyn SnapshotStore>>;

pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Effective settings, resolved on first use.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| Settings::load(self.cli))
    }

    /// UI context for a command's `--json` / `--format` flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }

    pub fn locale(&self) -> anyhow::Result<Box<dyn Locale>> {
        Ok(self.settings()?.locale.locale())
    }

    /// Open an existing journal.
    pub fn open_journal(&self) -> anyhow::Result<Journal> {
        self.open(false)
    }

    /// Open the journal, creating it on first write if it does not exist.
    pub fn open_or_create_journal(&self) -> anyhow::Result<Journal> {
        self.open(true)
    }

    fn open(&self, create: bool) -> anyhow::Result<Journal> {
        let settings = self.settings()?;
        let path = settings.journal_path();
        if !create && !path.exists() {
            return Err(CliError::not_found(missing_journal_message(path), INIT_HINT).into());
        }

        let backend: Box<dyn SnapshotStore> = match settings.backend {
            Backend::Json => Box::new(JsonFileStore::new(path)),
            Backend::Sqlite => Box::new(SqliteStore::open(path)?),
        };
        info!(path = %path.display(), backend = ?settings.backend, "opening journal");
        Ok(EntryStore::open(
            backend,
            settings.catalog.clone(),
            settings.zone,
        ))
    }

    pub fn stats_engine(&self) -> anyhow::Result<StatisticsEngine> {
        let settings = self.settings()?;
        let config = StatsConfig::new(settings.catalog.clone(), settings.zone)
            .with_positive(settings.positive.iter().copied())?;
        Ok(StatisticsEngine::new(config))
    }

    pub fn quotes(&self) -> QuoteSelector {
        QuoteSelector::default()
    }
}
