//! Path and identifier resolution.

use std::path::{Path, PathBuf};

use moodlog_core::{EntryStore, SnapshotStore};
use uuid::Uuid;

use crate::config::default_config_path;
use crate::errors::CliError;

/// Resolve the config file path, checking MOODLOG_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("MOODLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Error message when no config file exists and no journal path was given.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No journal configured (no config at {})",
        config_path.display()
    )
}

/// Error message when the journal file is missing.
pub fn missing_journal_message(path: &Path) -> String {
    format!("No journal found at {}", path.display())
}

pub const INIT_HINT: &str =
    "Hint: Run `moodlog init`, or point at a journal with --journal / MOODLOG_PATH.";

/// Resolve a full UUID or a unique prefix of one to an entry id.
pub fn resolve_entry_id<S: SnapshotStore>(
    store: &EntryStore<S>,
    value: &str,
) -> anyhow::Result<Uuid> {
    let value = value.trim().to_lowercase();
    if let Ok(id) = Uuid::parse_str(&value) {
        if store.get(id).is_some() {
            return Ok(id);
        }
        return Err(not_found_entry(&value).into());
    }
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid entry ID: {}", value),
            "Hint: Entry IDs are UUIDs; the first 8 characters are enough.",
        )
        .into());
    }

    let matches: Vec<Uuid> = store
        .all()
        .into_iter()
        .map(|entry| entry.id)
        .filter(|id| id.to_string().starts_with(&value))
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(not_found_entry(&value).into()),
        _ => Err(CliError::invalid_input_with_hint(
            format!("Entry ID prefix {} is ambiguous ({} matches)", value, matches.len()),
            "Hint: Use more characters of the ID.",
        )
        .into()),
    }
}

fn not_found_entry(value: &str) -> CliError {
    CliError::not_found(
        format!("Entry not found: {}", value),
        "Hint: Run `moodlog list` to find entry IDs.",
    )
}
