//! Game configuration
//!
//! Tunables for a quiz session, deserializable from JSON so the host can ship
//! them alongside the country table.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default number of rounds in a game
pub const DEFAULT_ROUND_COUNT: usize = 10;

/// Default number of options offered for the country and capital questions
pub const DEFAULT_NUM_CHOICES: usize = 4;

/// Session-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rounds generated by `start_default`, capped at the dataset size
    #[serde(default = "default_round_count")]
    pub round_count: usize,
    /// Options per multiple-choice question (target included)
    #[serde(default = "default_num_choices")]
    pub num_choices: usize,
}

fn default_round_count() -> usize {
    DEFAULT_ROUND_COUNT
}

fn default_num_choices() -> usize {
    DEFAULT_NUM_CHOICES
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_count: DEFAULT_ROUND_COUNT,
            num_choices: DEFAULT_NUM_CHOICES,
        }
    }
}

impl GameConfig {
    /// Parse a configuration object, filling missing fields with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
