//! Bingo configuration system.
//!
//! TOML-based configuration for the completion provider, the guessing game,
//! the tokenizer demo and logging. All config sections use sensible defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bingo_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BingoConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use std::path::Path;

use bingo_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default `config.toml` if none exists. Values that fail
/// validation are logged and kept; callers validate after applying overrides.
pub fn load_config() -> Result<BingoConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    Ok(config)
}

/// Load config from an explicit path.
///
/// Unlike [`load_config`], a missing file is an error rather than a reason
/// to write a default one.
pub fn load_config_from(path: &Path) -> Result<BingoConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BingoConfig) -> String {
    bingo_common::inspect(config)
}
