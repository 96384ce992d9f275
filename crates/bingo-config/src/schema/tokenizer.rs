//! Tokenizer visualization configuration types.

use serde::{Deserialize, Serialize};

/// Sentence the tokenizer demo splits when no text is given.
pub const DEFAULT_TOKENIZER_TEXT: &str = "Byte pair encoding (also known as digram coding) \
is an algorithm, first described in 1994 by Philip Gage for encoding strings of text \
into tabular form for use in downstream modeling.";

/// Tokenizer demo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Path to a HuggingFace `tokenizer.json`.
    pub path: String,
    pub text: String,
    /// String printed between decoded tokens.
    pub separator: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            path: "tokenizer.json".to_string(),
            text: DEFAULT_TOKENIZER_TEXT.to_string(),
            separator: "|".to_string(),
        }
    }
}
