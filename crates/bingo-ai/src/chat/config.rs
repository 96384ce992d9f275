//! Chat completions client configuration.

use std::fmt;
use std::time::Duration;

/// Environment variables checked, in order, for a bearer token.
pub const API_KEY_ENV_VARS: &[&str] = &["BINGO_API_KEY", "OPENAI_API_KEY"];

/// Chat completions client configuration.
#[derive(Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ChatConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            max_tokens: 512,
            temperature: 0.7,
            timeout: Duration::from_secs(120),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Fill in the API key from the environment if none is set yet.
    ///
    /// Local servers usually need no key, so a missing variable is not an error.
    pub fn with_env_api_key(mut self) -> Self {
        if self.api_key.is_none() {
            self.api_key = API_KEY_ENV_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok())
                .filter(|key| !key.is_empty());
        }
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let config = ChatConfig::new("http://127.0.0.1:8080/v1/", "llama");
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/v1/chat/completions");

        let config = ChatConfig::new("http://127.0.0.1:8080/v1", "llama");
        assert_eq!(config.endpoint(), "http://127.0.0.1:8080/v1/chat/completions");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ChatConfig::new("https://api.openai.com/v1", "gpt-4o-mini")
            .with_api_key("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn explicit_key_wins_over_environment() {
        let config = ChatConfig::new("http://localhost:8080/v1", "llama")
            .with_api_key("from-config")
            .with_env_api_key();
        assert_eq!(config.api_key.as_deref(), Some("from-config"));
    }
}
