//! Effective settings: CLI flags layered over the config file.

use std::path::{Path, PathBuf};

use chrono::Weekday;
use moodlog_core::{DayZone, LocaleId, MoodCatalog};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{read_config, Backend, MoodlogConfig};
use crate::errors::CliError;
use crate::helpers::{parse_mood, parse_weekday};

use super::resolver::{missing_config_message, resolve_config_path, INIT_HINT};

/// Everything a command needs to open and present the journal.
#[derive(Debug, Clone)]
pub struct Settings {
    pub journal_path: PathBuf,
    pub backend: Backend,
    pub zone: DayZone,
    pub week_start: Weekday,
    pub positive: Vec<usize>,
    pub locale: LocaleId,
    pub catalog: MoodCatalog,
}

impl Settings {
    /// Resolve settings for `cli`.
    ///
    /// The journal path comes from `--journal`/`MOODLOG_PATH` or the config
    /// file; with neither, the journal is not configured and this fails with
    /// a not-found error. Other sections fall back to defaults.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = resolve_config_path()?;
        let config = if config_path.exists() {
            Some(read_config(&config_path)?)
        } else {
            None
        };

        let (journal_path, backend) = match (&cli.journal, &config) {
            (Some(path), _) => {
                let path = PathBuf::from(path);
                let backend = Backend::from_path(&path);
                (path, backend)
            }
            (None, Some(config)) => (PathBuf::from(&config.journal.path), config.journal.backend),
            (None, None) => {
                return Err(CliError::not_found(missing_config_message(&config_path), INIT_HINT).into())
            }
        };

        let mut settings = Self::from_parts(journal_path, backend, config.as_ref())
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", config_path.display(), e))?;
        if let Some(flag) = cli.locale.as_deref() {
            settings.locale = flag
                .parse()
                .map_err(|e: moodlog_core::MoodError| CliError::invalid_input(e.to_string()))?;
        }
        debug!(
            journal = %settings.journal_path.display(),
            backend = ?settings.backend,
            zone = %settings.zone,
            "settings resolved"
        );
        Ok(settings)
    }

    fn from_parts(
        journal_path: PathBuf,
        backend: Backend,
        config: Option<&MoodlogConfig>,
    ) -> anyhow::Result<Self> {
        let catalog = MoodCatalog::default();
        let mut settings = Self {
            journal_path,
            backend,
            zone: DayZone::Local,
            week_start: Weekday::Mon,
            positive: moodlog_core::mood::DEFAULT_POSITIVE.to_vec(),
            locale: LocaleId::default(),
            catalog,
        };

        if let Some(config) = config {
            settings.zone = DayZone::parse(&config.calendar.timezone)?;
            settings.week_start = parse_weekday(&config.calendar.week_start)?;
            settings.positive = config
                .moods
                .positive
                .iter()
                .map(|value| parse_mood(value, &settings.catalog))
                .collect::<anyhow::Result<Vec<_>>>()?;
            settings.locale = config.ui.locale.parse()?;
        }
        Ok(settings)
    }

    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config() {
        let settings =
            Settings::from_parts(PathBuf::from("/tmp/j.json"), Backend::Json, None).unwrap();

        assert_eq!(settings.zone, DayZone::Local);
        assert_eq!(settings.week_start, Weekday::Mon);
        assert_eq!(settings.positive, vec![2, 3]);
        assert_eq!(settings.locale, LocaleId::En);
    }

    #[test]
    fn test_config_sections_apply() {
        let config: MoodlogConfig = toml::from_str(
            "[journal]\npath = \"/tmp/j.db\"\nbackend = \"sqlite\"\n\n[calendar]\ntimezone = \"Europe/Kyiv\"\nweek_start = \"sunday\"\n\n[moods]\npositive = [\"happy\", \"4\"]\n\n[ui]\nlocale = \"uk\"\n",
        )
        .unwrap();

        let settings =
            Settings::from_parts(PathBuf::from("/tmp/j.db"), Backend::Sqlite, Some(&config))
                .unwrap();

        assert_eq!(settings.zone.to_string(), "Europe/Kyiv");
        assert_eq!(settings.week_start, Weekday::Sun);
        assert_eq!(settings.positive, vec![3, 4]);
        assert_eq!(settings.locale, LocaleId::Uk);
    }

    #[test]
    fn test_bad_timezone_is_rejected() {
        let config: MoodlogConfig =
            toml::from_str("[journal]\npath = \"/tmp/j.json\"\n\n[calendar]\ntimezone = \"Mars/Base\"\n")
                .unwrap();
        assert!(
            Settings::from_parts(PathBuf::from("/tmp/j.json"), Backend::Json, Some(&config)).is_err()
        );
    }
}
