//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Bingo Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[provider]
# Any OpenAI-compatible server: llama-server, vLLM, Ollama, OpenAI.
base_url = "http://127.0.0.1:8080/v1"
model = "Meta-Llama-3-8B-Instruct.Q4_0"
# api_key = ""           # prefer the BINGO_API_KEY environment variable
# max_tokens = 512       # 16-32768
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 120     # 1-3600

[game]
max = 10                 # secrets are drawn from [0, max], 1-1000000
rounds = 10              # dispatch steps before the closing questions, 1-1000
# seed = 42              # fixed RNG seed for reproducible secrets

[tokenizer]
# path = "tokenizer.json"
# separator = "|"
# text = "Byte pair encoding ..."

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
