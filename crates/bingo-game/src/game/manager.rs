//! Game struct, history bookkeeping and accessors.

use std::sync::Arc;

use bingo_ai::{AiClient, Message, TokenTracker, ToolDefinition};
use serde::Serialize;

use crate::prompts::{opening_prompt, SYSTEM_PROMPT};
use crate::secret::GuessState;
use crate::tools::game_tools;

/// Counters kept alongside the conversation. Never sent to the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub resets: u32,
    pub guesses: u32,
    pub wrong_guesses: u32,
    pub wins: u32,
}

/// A guessing game driven by a tool-calling model.
pub struct Game {
    /// Provider the history is sent to on every step.
    pub(super) client: Arc<dyn AiClient>,
    pub(super) state: GuessState,
    /// Append-only conversation history.
    pub(super) messages: Vec<Message>,
    pub(super) tools: Vec<ToolDefinition>,
    pub(super) tracker: TokenTracker,
    pub(super) stats: GameStats,
    /// Index of the first message not yet returned by `take_transcript`.
    pub(super) shown: usize,
}

impl Game {
    /// Start a game with the seed conversation (system prompt + rules).
    pub fn new(client: Arc<dyn AiClient>, state: GuessState) -> Self {
        let messages = vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(opening_prompt(state.max())),
        ];
        Self {
            client,
            state,
            messages,
            tools: game_tools(),
            tracker: TokenTracker::new(),
            stats: GameStats::default(),
            shown: 0,
        }
    }

    /// Messages appended since the previous call, oldest first.
    pub fn take_transcript(&mut self) -> &[Message] {
        let start = self.shown;
        self.shown = self.messages.len();
        &self.messages[start..]
    }

    /// Get the full conversation history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn state(&self) -> &GuessState {
        &self.state
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    pub(super) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}
