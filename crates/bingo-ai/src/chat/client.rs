//! Chat client struct, request building, and response parsing.

use serde_json::Value;

use crate::{AiError, AiResponse, Message, TokenUsage, ToolCall, ToolChoice, ToolDefinition};

use super::config::ChatConfig;

/// OpenAI-compatible chat completions client.
pub struct ChatClient {
    pub(crate) config: ChatConfig,
    pub(crate) http: reqwest::Client,
}

impl ChatClient {
    pub fn new(config: ChatConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Build the JSON request body for the chat completions API.
    ///
    /// `tools` and `tool_choice` are omitted entirely when no tools are
    /// offered; some servers reject a `tool_choice` without tools.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
        tool_choice: ToolChoice,
    ) -> Value {
        let msgs: Vec<Value> = messages
            .iter()
            .map(|msg| {
                serde_json::json!({
                    "role": msg.role.as_str(),
                    "content": msg.content,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": msgs,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        });

        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_chat_tool).collect();
            body["tools"] = serde_json::json!(tool_defs);
            body["tool_choice"] = serde_json::json!(tool_choice.as_str());
        }

        body
    }

    /// Parse a non-streaming response, keeping only the first choice.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AiResponse, AiError> {
        let message = json["choices"]
            .get(0)
            .map(|choice| &choice["message"])
            .ok_or_else(|| AiError::ParseError("no choices in response".into()))?;

        let content = message["content"].as_str().unwrap_or_default().to_string();

        let tool_calls = match message["tool_calls"].as_array() {
            Some(calls) => calls
                .iter()
                .map(parse_tool_call)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(AiResponse {
            content,
            tool_calls,
            usage,
        })
    }
}

/// Convert a tool definition to the chat completions `tools` entry format.
pub fn to_chat_tool(tool: &ToolDefinition) -> Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        },
    })
}

fn parse_tool_call(raw: &Value) -> Result<ToolCall, AiError> {
    if let Some(kind) = raw["type"].as_str() {
        if kind != "function" {
            return Err(AiError::ParseError(format!(
                "unsupported tool call type {kind:?}"
            )));
        }
    }

    let function = &raw["function"];
    let name = function["name"]
        .as_str()
        .ok_or_else(|| AiError::ParseError("tool call without a function name".into()))?;

    // Arguments arrive as a JSON-encoded string; a few servers send the object.
    let arguments = match &function["arguments"] {
        Value::Null => serde_json::json!({}),
        Value::String(s) if s.trim().is_empty() => serde_json::json!({}),
        Value::String(s) => serde_json::from_str(s).map_err(|e| {
            AiError::ParseError(format!("invalid arguments for tool {name:?}: {e}"))
        })?,
        other => other.clone(),
    };

    Ok(ToolCall {
        id: raw["id"].as_str().unwrap_or_default().to_string(),
        name: name.to_string(),
        arguments,
    })
}
