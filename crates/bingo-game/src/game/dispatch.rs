//! Async step/finish methods for Game.

use bingo_ai::{Message, ToolChoice};
use tracing::{debug, info, warn};

use crate::command::GameCommand;
use crate::error::GameError;
use crate::prompts::{CLOSING_QUESTIONS, PLEASE_GUESS};
use crate::secret::Verdict;

use super::manager::Game;

impl Game {
    /// Run one provider round trip and apply the returned tool calls.
    ///
    /// Every call in the response is validated before any of them is
    /// applied, so an unknown tool leaves the history untouched. A response
    /// with no tool calls is a no-op. Returns the number of calls applied.
    pub async fn step(&mut self) -> Result<usize, GameError> {
        let response = self
            .client
            .send_message(&self.messages, &self.tools, ToolChoice::Auto)
            .await?;
        self.tracker.record(&response.usage);

        if response.tool_calls.is_empty() {
            warn!(
                content = %response.content,
                "model answered without calling a tool, skipping step"
            );
            return Ok(0);
        }

        let commands = response
            .tool_calls
            .iter()
            .map(GameCommand::from_tool_call)
            .collect::<Result<Vec<_>, _>>()?;

        for command in &commands {
            self.apply(*command);
        }
        Ok(commands.len())
    }

    fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Reset => {
                let secret = self.state.reset();
                self.stats.resets += 1;
                debug!(secret, "reset");
                self.push(Message::assistant("reset"));
                self.push(Message::user(PLEASE_GUESS));
            }
            GameCommand::Guess { n } => {
                let verdict = self.state.guess(n);
                self.stats.guesses += 1;
                if verdict == Verdict::Exact {
                    self.stats.wins += 1;
                } else {
                    self.stats.wrong_guesses += 1;
                }
                debug!(n, %verdict, "guess");
                self.push(Message::assistant(n.to_string()));
                self.push(Message::user(verdict.as_str()));
            }
        }
    }

    /// Ask the closing questions and record the model's free-text answers.
    ///
    /// Appends four messages: each question followed by its answer.
    pub async fn finish(&mut self) -> Result<Vec<String>, GameError> {
        let mut answers = Vec::with_capacity(CLOSING_QUESTIONS.len());
        for question in CLOSING_QUESTIONS {
            self.push(Message::user(question));
            let response = self
                .client
                .send_message(&self.messages, &[], ToolChoice::None)
                .await?;
            self.tracker.record(&response.usage);
            self.push(Message::assistant(response.content.clone()));
            answers.push(response.content);
        }
        Ok(answers)
    }

    /// Run `rounds` steps followed by [`Game::finish`].
    pub async fn play(&mut self, rounds: u32) -> Result<Vec<String>, GameError> {
        info!(rounds, model = self.client.model(), "starting game");
        for round in 1..=rounds {
            let applied = self.step().await?;
            debug!(round, applied, messages = self.messages.len(), "step done");
        }
        self.finish().await
    }
}
