//! `bingo play`: run the guessing game against the configured provider.

use std::sync::Arc;
use std::time::Duration;

use bingo_ai::{ChatClient, ChatConfig, Message};
use bingo_common::{inspect, BingoError};
use bingo_config::schema::{BingoConfig, ProviderConfig};
use bingo_game::{Game, GameError, GameStats, GuessState};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::cli::PlayArgs;

#[derive(Serialize)]
struct Report<'a> {
    messages: &'a [Message],
    stats: GameStats,
    provider_calls: u64,
    total_tokens: u64,
}

/// Fold command-line overrides into the loaded config.
pub fn apply_overrides(config: &mut BingoConfig, args: &PlayArgs) {
    if let Some(rounds) = args.rounds {
        config.game.rounds = rounds;
    }
    if let Some(max) = args.max {
        config.game.max = max;
    }
    if let Some(seed) = args.seed {
        config.game.seed = Some(seed);
    }
    if let Some(ref url) = args.base_url {
        config.provider.base_url = url.clone();
    }
    if let Some(ref model) = args.model {
        config.provider.model = model.clone();
    }
}

pub fn chat_config(provider: &ProviderConfig) -> ChatConfig {
    let config = ChatConfig::new(&provider.base_url, &provider.model)
        .with_max_tokens(provider.max_tokens)
        .with_temperature(provider.temperature)
        .with_timeout(Duration::from_secs(u64::from(provider.timeout_secs)));
    match provider.api_key {
        Some(ref key) => config.with_api_key(key),
        None => config.with_env_api_key(),
    }
}

/// Keep provider failures apart from a model that broke the game's rules.
fn game_error(e: GameError) -> BingoError {
    match e {
        GameError::Ai(e) => BingoError::Ai(e.to_string()),
        GameError::ProtocolViolation { ref tool } => {
            error!(%tool, "model called a tool outside the catalog");
            BingoError::Game(e.to_string())
        }
        GameError::InvalidArguments { ref tool, ref reason } => {
            error!(%tool, %reason, "model sent unusable tool arguments");
            BingoError::Game(e.to_string())
        }
    }
}

pub async fn run(config: &BingoConfig, json: bool) -> Result<(), BingoError> {
    let client = ChatClient::new(chat_config(&config.provider))
        .map_err(|e| BingoError::Ai(e.to_string()))?;
    info!(endpoint = %client.config().endpoint(), "using chat completions provider");

    let state = match config.game.seed {
        Some(seed) => GuessState::seeded(config.game.max, seed),
        None => GuessState::new(config.game.max),
    };
    let mut game = Game::new(Arc::new(client), state);

    // Print whatever happened even when the game ends early.
    let outcome = game.play(config.game.rounds).await;

    if json {
        let report = Report {
            messages: game.messages(),
            stats: game.stats(),
            provider_calls: game.tracker().call_count(),
            total_tokens: game.tracker().total_tokens(),
        };
        println!("{}", inspect(&report));
    } else {
        println!();
        println!();
        for message in game.take_transcript() {
            println!("{}: {}", message.role, message.content);
        }
    }

    info!(
        calls = game.tracker().call_count(),
        tokens = game.tracker().total_tokens(),
        "provider usage"
    );

    let answers = outcome.map_err(game_error)?;
    debug!(?answers, "closing answers");

    if !json {
        let stats = game.stats();
        println!();
        println!(
            "actual: {} resets, {} guesses, {} wrong, {} correct",
            stats.resets, stats.guesses, stats.wrong_guesses, stats.wins
        );
    }
    Ok(())
}
