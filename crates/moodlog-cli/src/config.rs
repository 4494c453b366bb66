use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use moodlog_core::fs::write_atomic;

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodlogConfig {
    pub journal: JournalSection,
    #[serde(default)]
    pub calendar: CalendarSection,
    #[serde(default)]
    pub moods: MoodsSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: String,
    #[serde(default)]
    pub backend: Backend,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarSection {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            week_start: default_week_start(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MoodsSection {
    /// Mood keys or indices that count toward the positive streak.
    #[serde(default = "default_positive")]
    pub positive: Vec<String>,
}

impl Default for MoodsSection {
    fn default() -> Self {
        Self {
            positive: default_positive(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
}

impl Backend {
    pub fn file_name(self) -> &'static str {
        match self {
            Backend::Json => "journal.json",
            Backend::Sqlite => "journal.db",
        }
    }

    /// Guess the backend from a journal file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("db") | Some("sqlite") | Some("sqlite3") => Backend::Sqlite,
            _ => Backend::Json,
        }
    }
}

fn default_timezone() -> String {
    "local".to_string()
}

fn default_week_start() -> String {
    "monday".to_string()
}

fn default_positive() -> Vec<String> {
    vec!["calm".to_string(), "happy".to_string()]
}

fn default_locale() -> String {
    "en".to_string()
}

impl MoodlogConfig {
    pub fn new(
        journal_path: PathBuf,
        backend: Backend,
        timezone: Option<String>,
        week_start: Option<String>,
        locale: Option<String>,
    ) -> Self {
        Self {
            journal: JournalSection {
                path: journal_path.to_string_lossy().to_string(),
                backend,
            },
            calendar: CalendarSection {
                timezone: timezone.unwrap_or_else(default_timezone),
                week_start: week_start.unwrap_or_else(default_week_start),
            },
            moods: MoodsSection::default(),
            ui: UiSection {
                locale: locale.unwrap_or_else(default_locale),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_journal_path(backend: Backend) -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(backend.file_name()))
}

pub fn read_config(path: &Path) -> anyhow::Result<MoodlogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &MoodlogConfig) -> anyhow::Result<()> {
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    write_atomic(path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("moodlog"));
        }
    }
    Ok(home_dir()?.join(".config").join("moodlog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("moodlog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("moodlog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_fills_defaults() {
        let config: MoodlogConfig = toml::from_str("[journal]\npath = \"/tmp/j.json\"\n").unwrap();

        assert_eq!(config.journal.backend, Backend::Json);
        assert_eq!(config.calendar.timezone, "local");
        assert_eq!(config.calendar.week_start, "monday");
        assert_eq!(config.moods.positive, vec!["calm", "happy"]);
        assert_eq!(config.ui.locale, "en");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = MoodlogConfig::new(
            PathBuf::from("/tmp/journal.db"),
            Backend::Sqlite,
            Some("Europe/Kyiv".to_string()),
            Some("sunday".to_string()),
            Some("uk".to_string()),
        );
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: MoodlogConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.journal.backend, Backend::Sqlite);
        assert_eq!(parsed.calendar.timezone, "Europe/Kyiv");
        assert_eq!(parsed.calendar.week_start, "sunday");
        assert_eq!(parsed.ui.locale, "uk");
    }

    #[test]
    fn test_backend_from_extension() {
        assert_eq!(Backend::from_path(Path::new("a/journal.db")), Backend::Sqlite);
        assert_eq!(Backend::from_path(Path::new("a/journal.json")), Backend::Json);
        assert_eq!(Backend::from_path(Path::new("a/journal")), Backend::Json);
    }
}
