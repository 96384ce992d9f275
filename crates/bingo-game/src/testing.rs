//! Scripted provider for driving a `Game` without a model.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bingo_ai::{
    AiClient, AiError, AiResponse, Message, TokenUsage, ToolCall, ToolChoice, ToolDefinition,
};

/// What the game sent on one call.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub messages: Vec<Message>,
    pub tool_names: Vec<String>,
    pub tool_choice: ToolChoice,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub(crate) struct ScriptedClient {
    responses: Mutex<VecDeque<Result<AiResponse, AiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_tool_calls(&self, calls: Vec<ToolCall>) -> &Self {
        self.push(Ok(AiResponse {
            content: String::new(),
            tool_calls: calls,
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 2,
            },
        }))
    }

    pub fn push_text(&self, text: &str) -> &Self {
        self.push(Ok(AiResponse {
            content: text.to_string(),
            tool_calls: Vec::new(),
            usage: TokenUsage {
                input_tokens: 10,
                output_tokens: 5,
            },
        }))
    }

    pub fn push_error(&self, err: AiError) -> &Self {
        self.push(Err(err))
    }

    fn push(&self, response: Result<AiResponse, AiError>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        tool_choice: ToolChoice,
    ) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            messages: messages.to_vec(),
            tool_names: tools.iter().map(|t| t.name.clone()).collect(),
            tool_choice,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AiError::ApiError("script exhausted".into())))
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

pub(crate) fn reset_call() -> ToolCall {
    ToolCall {
        id: "call_reset".into(),
        name: "reset".into(),
        arguments: serde_json::json!({}),
    }
}

pub(crate) fn guess_call(n: i64) -> ToolCall {
    ToolCall {
        id: format!("call_guess_{n}"),
        name: "guess".into(),
        arguments: serde_json::json!({ "n": n }),
    }
}

pub(crate) fn tool_call(name: &str) -> ToolCall {
    ToolCall {
        id: format!("call_{name}"),
        name: name.into(),
        arguments: serde_json::json!({}),
    }
}
