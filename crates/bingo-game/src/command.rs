//! Typed view of the tool calls the model may make.

use bingo_ai::ToolCall;
use serde_json::Value;

use crate::error::GameError;
use crate::tools::{GUESS_TOOL, RESET_TOOL};

/// A validated tool call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Reset,
    Guess { n: i64 },
}

impl GameCommand {
    /// Interpret a raw tool call against the catalog.
    ///
    /// Unknown names are a [`GameError::ProtocolViolation`]. `reset`
    /// ignores whatever arguments it was given.
    pub fn from_tool_call(call: &ToolCall) -> Result<Self, GameError> {
        match call.name.as_str() {
            RESET_TOOL => Ok(GameCommand::Reset),
            GUESS_TOOL => {
                let n = parse_guess(&call.arguments["n"]).map_err(|reason| {
                    GameError::InvalidArguments {
                        tool: call.name.clone(),
                        reason,
                    }
                })?;
                Ok(GameCommand::Guess { n })
            }
            _ => Err(GameError::ProtocolViolation {
                tool: call.name.clone(),
            }),
        }
    }
}

// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn is_whole_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

// Small models sometimes quote numbers or emit `5.0`; both are accepted.
fn parse_guess(value: &Value) -> Result<i64, String> {
    match value {
        Value::Null => Err("missing required argument \"n\"".to_string()),
        Value::Number(num) => num
            .as_i64()
            .or_else(|| num.as_f64().filter(|f| is_whole_i64(*f)).map(|f| f as i64))
            .ok_or_else(|| format!("\"n\" = {num} is not an integer")),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("\"n\" = {s:?} is not an integer")),
        other => Err(format!("\"n\" = {other} is not an integer")),
    }
}
