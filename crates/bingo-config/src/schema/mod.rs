//! Configuration schema types for Bingo.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the demos were written against.

mod game;
mod provider;
mod system;
mod tokenizer;

pub use game::*;
pub use provider::*;
pub use system::*;
pub use tokenizer::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Bingo.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BingoConfig {
    pub provider: ProviderConfig,
    pub game: GameConfig,
    pub tokenizer: TokenizerConfig,
    pub logging: LoggingConfig,
}
