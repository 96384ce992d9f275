//! The dispatch loop: conversation history plus the guessing state.

mod dispatch;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::{Game, GameStats};
