mod cli;
mod play;
mod tokens;

use std::path::Path;
use std::process::ExitCode;

use bingo_common::{BingoError, ConfigError};
use bingo_config::BingoConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use cli::{Args, Command, PlayArgs};

/// Load environment variables from a `.env` file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv(path: &Path) {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

fn init_logging(directive: &str) {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<BingoConfig, ConfigError> {
    match path {
        Some(path) => bingo_config::load_config_from(path),
        None => bingo_config::load_config(),
    }
}

/// An explicit `--config` must load; the default path falls back to defaults.
fn resolve_config(
    loaded: Result<BingoConfig, ConfigError>,
    explicit: bool,
) -> Result<BingoConfig, ConfigError> {
    match loaded {
        Ok(config) => Ok(config),
        Err(e) if explicit => Err(e),
        Err(e) => {
            tracing::warn!("config load failed, using defaults: {e}");
            Ok(BingoConfig::default())
        }
    }
}

async fn run(args: Args, mut config: BingoConfig) -> Result<(), BingoError> {
    match args.command.unwrap_or_else(|| Command::Play(PlayArgs::default())) {
        Command::Play(play_args) => {
            play::apply_overrides(&mut config, &play_args);
            bingo_config::validation::validate(&config)?;
            play::run(&config, play_args.json).await
        }
        Command::Tokens(tokens_args) => tokens::run(&config.tokenizer, &tokens_args),
        Command::Config => {
            println!("{}", bingo_config::config_to_json(&config));
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv(Path::new(".env"));

    let args = cli::parse();

    // The log level may come from the config, so load it before logging starts.
    let loaded = load_config(args.config.as_deref());
    let level = args.log_level.clone().unwrap_or_else(|| match loaded {
        Ok(ref config) => config.logging.level.as_filter().to_string(),
        Err(_) => "info".to_string(),
    });
    init_logging(&level);

    tracing::info!("bingo v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match resolve_config(loaded, args.config.is_some()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to load config: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
