//! `bingo tokens`: show how a BPE tokenizer splits text.
//!
//! Each token id is decoded on its own, with special tokens skipped, so the
//! output shows exactly where the tokenizer placed its boundaries.

use std::path::Path;

use bingo_common::BingoError;
use bingo_config::schema::TokenizerConfig;
use tokenizers::Tokenizer;
use tracing::debug;

use crate::cli::TokensArgs;

pub fn load(path: &Path) -> Result<Tokenizer, BingoError> {
    Tokenizer::from_file(path)
        .map_err(|e| BingoError::Tokenizer(format!("failed to load {}: {e}", path.display())))
}

/// Encode `text` and decode every id back to its surface form.
pub fn pieces(tokenizer: &Tokenizer, text: &str) -> Result<Vec<String>, BingoError> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| BingoError::Tokenizer(format!("failed to encode text: {e}")))?;

    encoding
        .get_ids()
        .iter()
        .map(|&id| {
            tokenizer
                .decode(&[id], true)
                .map_err(|e| BingoError::Tokenizer(format!("failed to decode token {id}: {e}")))
        })
        .collect()
}

pub fn run(config: &TokenizerConfig, args: &TokensArgs) -> Result<(), BingoError> {
    let path = args
        .tokenizer
        .clone()
        .unwrap_or_else(|| config.path.clone().into());
    let text = args.text.as_deref().unwrap_or(&config.text);
    let separator = args.separator.as_deref().unwrap_or(&config.separator);

    let tokenizer = load(&path)?;
    debug!(
        path = %path.display(),
        vocab = tokenizer.get_vocab_size(true),
        "tokenizer loaded"
    );

    let pieces = pieces(&tokenizer, text)?;
    debug!(tokens = pieces.len(), "text encoded");
    println!("{}", pieces.join(separator));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const WORD_LEVEL: &str = r#"{
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [],
        "normalizer": null,
        "pre_tokenizer": {"type": "Whitespace"},
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": {"[UNK]": 0, "byte": 1, "pair": 2, "encoding": 3},
            "unk_token": "[UNK]"
        }
    }"#;

    fn tokenizer() -> Tokenizer {
        Tokenizer::from_str(WORD_LEVEL).unwrap()
    }

    #[test]
    fn pieces_follow_token_boundaries() {
        let pieces = pieces(&tokenizer(), "byte pair encoding").unwrap();
        assert_eq!(pieces, ["byte", "pair", "encoding"]);
        assert_eq!(pieces.join("|"), "byte|pair|encoding");
    }

    #[test]
    fn unknown_words_map_to_unk() {
        let pieces = pieces(&tokenizer(), "byte soup").unwrap();
        assert_eq!(pieces, ["byte", "[UNK]"]);
    }

    #[test]
    fn load_missing_file_is_tokenizer_error() {
        let err = load(Path::new("/tmp/no_such_bingo_tokenizer.json")).unwrap_err();
        assert!(matches!(err, BingoError::Tokenizer(_)));
        assert!(err.to_string().contains("no_such_bingo_tokenizer.json"));
    }
}
