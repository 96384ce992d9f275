//! Guessing game configuration types.

use serde::{Deserialize, Serialize};

/// Number guessing game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Largest secret the game may pick; secrets are drawn from `[0, max]`.
    pub max: u32,
    /// Number of dispatch steps before the closing questions.
    pub rounds: u32,
    /// Fixed RNG seed for reproducible secrets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max: 10,
            rounds: 10,
            seed: None,
        }
    }
}
