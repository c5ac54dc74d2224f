//! Standings configuration: scoring table and tie-break order, loaded from JSON.
//!
//! ```json
//! {
//!   "scoring_table": { "3-0": [3, 0], "3-1": [3, 0], "3-2": [2, 1] },
//!   "tie_break_order": ["points", "win_percentage", "wins"]
//! }
//! ```
//!
//! Both keys are optional; a missing key keeps the documented default.

use crate::logic::{ScoringTable, TieBreakOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Also covers overrides rejected by validation (bad scoring table, duplicate criteria).
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Overridable policy for one standings computation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsConfig {
    #[serde(default)]
    pub scoring_table: ScoringTable,
    #[serde(default)]
    pub tie_break_order: TieBreakOrder,
}

impl StandingsConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded standings config from {}", path.display());
        Ok(config)
    }
}
