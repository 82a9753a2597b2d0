//! Configuration for the spelling corrector.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::spelling::suggest::{MAX_EDIT_DISTANCE, SuggestionConfig};

/// What to do with dictionary words outside the supported alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Fail the load on the first invalid word.
    #[default]
    Reject,
    /// Log and skip invalid words.
    Skip,
}

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum edit distance for suggestions (1 or 2).
    pub max_distance: usize,
    /// Handling of dictionary words containing unsupported characters.
    pub invalid_words: InvalidWordPolicy,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_distance: MAX_EDIT_DISTANCE,
            invalid_words: InvalidWordPolicy::Reject,
        }
    }
}

impl CorrectorConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpellError::invalid_config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CorrectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are supported.
    pub fn validate(&self) -> Result<()> {
        self.suggestion_config().validate()
    }

    /// The suggestion engine settings derived from this configuration.
    pub fn suggestion_config(&self) -> SuggestionConfig {
        SuggestionConfig {
            max_distance: self.max_distance,
        }
    }
}
