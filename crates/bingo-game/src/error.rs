use bingo_ai::AiError;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The model called a tool outside the declared catalog.
    #[error("AI is not following protocol: unknown tool {tool:?}")]
    ProtocolViolation { tool: String },

    #[error("invalid arguments for tool {tool:?}: {reason}")]
    InvalidArguments { tool: String, reason: String },

    #[error(transparent)]
    Ai(#[from] AiError),
}
