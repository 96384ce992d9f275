//! Completion provider configuration types.

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions endpoint.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL up to and including the API version, e.g. `http://host:8080/v1`.
    pub base_url: String,
    pub model: String,
    /// Bearer token. Never written back out; prefer `BINGO_API_KEY`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Valid range: 16-32768.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Whole-request timeout in seconds (valid range: 1-3600).
    pub timeout_secs: u32,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/v1".to_string(),
            model: "Meta-Llama-3-8B-Instruct.Q4_0".to_string(),
            api_key: None,
            max_tokens: 512,
            temperature: 0.7,
            timeout_secs: 120,
        }
    }
}
