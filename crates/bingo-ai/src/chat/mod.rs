//! OpenAI-compatible chat completions client.
//!
//! Implements the `AiClient` trait against `POST {base_url}/chat/completions`,
//! the endpoint served by llama.cpp's `llama-server`, vLLM, Ollama and
//! OpenAI itself. Tool calls use the `tools` / `tool_choice` request fields.

mod api;
mod client;
mod config;

pub use client::{to_chat_tool, ChatClient};
pub use config::ChatConfig;
