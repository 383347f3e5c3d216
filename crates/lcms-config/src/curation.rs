//! Curation run configuration.

use lcms_core::columns::NULL_VALUE;
use lcms_core::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_null_value() -> String {
    NULL_VALUE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurationConfig {
    /// Token that marks a manual pick cell as "no value".
    #[serde(default = "default_null_value")]
    pub null_value: String,

    /// Permitted override values. Empty means the built-in Metlin set.
    #[serde(default)]
    pub vocabulary: Vec<String>,
}

impl Default for CurationConfig {
    fn default() -> Self {
        Self {
            null_value: default_null_value(),
            vocabulary: Vec::new(),
        }
    }
}

impl CurationConfig {
    /// Build the vocabulary for a run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a configured entry is blank.
    pub fn vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        if self.vocabulary.is_empty() {
            return Ok(Vocabulary::metlin_positive());
        }
        Vocabulary::from_names(&self.vocabulary).map_err(|e| ConfigError::InvalidValue {
            field: "curation.vocabulary".into(),
            reason: e.to_string(),
        })
    }

    /// Check field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `null_value` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.null_value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "curation.null_value".into(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }
}
