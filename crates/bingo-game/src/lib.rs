//! The number guessing game played by a tool-calling model.
//!
//! The model only ever answers with tool calls: `reset` picks a new secret,
//! `guess` compares a number against it. [`Game`] owns the conversation and
//! the secret, forwards the history to an [`AiClient`](bingo_ai::AiClient)
//! each step, and turns the returned calls into new messages.

pub mod command;
pub mod error;
pub mod game;
pub mod prompts;
pub mod secret;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

pub use command::GameCommand;
pub use error::GameError;
pub use game::{Game, GameStats};
pub use secret::{GuessState, Verdict};
pub use tools::{game_tools, GUESS_TOOL, RESET_TOOL};
