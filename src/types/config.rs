//! Tunable detector settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::InputError;
use crate::{BEHAVIOR_LOOKAHEAD, NEGATION_WINDOW, TIE_EPSILON, UNKNOWN_FLOOR};

/// Runtime overrides for the scoring constants; Default mirrors the crate constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorConfig {
    /// Max distance between the top two totals that triggers a tie-break
    pub tie_epsilon: f64,
    /// Winner score below which a label resolves to Unknown
    pub unknown_floor: f64,
    /// Tokens searched before a trigger for negation
    pub negation_window: usize,
    /// Tokens searched after a phrase's first word
    pub behavior_lookahead: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            tie_epsilon: TIE_EPSILON,
            unknown_floor: UNKNOWN_FLOOR,
            negation_window: NEGATION_WINDOW,
            behavior_lookahead: BEHAVIOR_LOOKAHEAD,
        }
    }
}

impl DetectorConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}
