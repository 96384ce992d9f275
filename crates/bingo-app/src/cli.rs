use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bingo: small demos of tool-calling and tokenization with local models.
#[derive(Parser, Debug)]
#[command(name = "bingo", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the model play the number guessing game (default).
    Play(PlayArgs),
    /// Show how a BPE tokenizer splits a piece of text.
    Tokens(TokensArgs),
    /// Print the effective configuration as JSON.
    Config,
}

#[derive(clap::Args, Debug, Default)]
pub struct PlayArgs {
    /// Number of dispatch steps before the closing questions.
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Largest secret number.
    #[arg(long)]
    pub max: Option<u32>,

    /// RNG seed for reproducible secrets.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chat completions base URL, e.g. http://127.0.0.1:8080/v1.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Model name sent to the provider.
    #[arg(long)]
    pub model: Option<String>,

    /// Print the history and statistics as JSON instead of a transcript.
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Default)]
pub struct TokensArgs {
    /// Text to tokenize (defaults to the configured sample sentence).
    pub text: Option<String>,

    /// Path to a HuggingFace tokenizer.json.
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,

    /// Separator printed between tokens.
    #[arg(long)]
    pub separator: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
