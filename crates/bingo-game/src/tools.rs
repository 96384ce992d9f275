//! The fixed tool catalog offered to the model.

use bingo_ai::ToolDefinition;

pub const RESET_TOOL: &str = "reset";
pub const GUESS_TOOL: &str = "guess";

/// The two tools the model may call: `reset()` and `guess(n)`.
pub fn game_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: RESET_TOOL.to_string(),
            description: "Start a new round with a freshly picked secret number.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "title": RESET_TOOL,
                "properties": {},
                "required": []
            }),
        },
        ToolDefinition {
            name: GUESS_TOOL.to_string(),
            description: "Guess a number.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "title": GUESS_TOOL,
                "properties": {
                    "n": { "title": "n", "type": "integer" }
                },
                "required": ["n"]
            }),
        },
    ]
}
