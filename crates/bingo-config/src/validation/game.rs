//! Game and tokenizer section validation.

use crate::schema::BingoConfig;

use super::helpers::{validate_non_empty, validate_range};

/// Validate game constraints.
pub(crate) fn validate_game(errors: &mut Vec<String>, config: &BingoConfig) {
    validate_range(errors, "game.max", config.game.max, 1, 1_000_000);
    validate_range(errors, "game.rounds", config.game.rounds, 1, 1000);
}

/// Validate tokenizer demo constraints.
pub(crate) fn validate_tokenizer(errors: &mut Vec<String>, config: &BingoConfig) {
    validate_non_empty(errors, "tokenizer.path", &config.tokenizer.path);
}
