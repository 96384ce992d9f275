//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each section has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod game;
mod helpers;
mod provider;


use crate::schema::BingoConfig;
use bingo_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BingoConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    provider::validate_provider(&mut errors, config);
    game::validate_game(&mut errors, config);
    game::validate_tokenizer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
