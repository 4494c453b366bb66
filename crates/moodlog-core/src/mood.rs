//! The fixed, ordered set of mood categories.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, Result};

/// Default mood keys, in index order.
pub const DEFAULT_MOODS: [&str; 5] = ["sad", "angry", "calm", "happy", "tired"];

/// Mood indices counted toward the positive streak by default (calm, happy).
pub const DEFAULT_POSITIVE: [usize; 2] = [2, 3];

/// Ordered mood categories. A mood index is a position in this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCatalog {
    keys: Vec<String>,
}

impl Default for MoodCatalog {
    fn default() -> Self {
        Self {
            keys: DEFAULT_MOODS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl MoodCatalog {
    /// Build a catalog from explicit keys.
    ///
    /// Keys are lowercased; empty or duplicate keys are rejected.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for key in keys {
            let key = key.as_ref().trim().to_lowercase();
            if key.is_empty() {
                return Err(MoodError::Config("Mood key cannot be empty".to_string()));
            }
            if normalized.contains(&key) {
                return Err(MoodError::Config(format!("Duplicate mood key: {}", key)));
            }
            normalized.push(key);
        }
        if normalized.is_empty() {
            return Err(MoodError::Config(
                "Mood catalog needs at least one mood".to_string(),
            ));
        }
        Ok(Self { keys: normalized })
    }

    /// Number of mood categories (`mood_count`).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key for a mood index, if in range.
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Iterate `(index, key)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.keys.iter().enumerate().map(|(i, k)| (i, k.as_str()))
    }

    /// Reject indices outside `[0, mood_count)`.
    pub fn validate(&self, index: usize) -> Result<()> {
        if index < self.keys.len() {
            Ok(())
        } else {
            Err(MoodError::Validation(format!(
                "Mood index {} is out of range (expected 0..{})",
                index,
                self.keys.len()
            )))
        }
    }

    /// Resolve a mood given either as an index ("3") or a key ("happy").
    pub fn parse(&self, value: &str) -> Result<usize> {
        let trimmed = value.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            self.validate(index)?;
            return Ok(index);
        }
        let lowered = trimmed.to_lowercase();
        self.keys
            .iter()
            .position(|k| *k == lowered)
            .ok_or_else(|| {
                MoodError::Validation(format!(
                    "Unknown mood: {} (expected one of: {})",
                    trimmed,
                    self.keys.join(", ")
                ))
            })
    }
}
