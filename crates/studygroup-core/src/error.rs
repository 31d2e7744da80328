use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown persona: {0}")]
    UnknownPersona(String),
}

/// Failure of the external content generator itself (network, auth,
/// empty output). Malformed text is not an error at this level.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("content generation failed: {0}")]
    Invocation(String),

    #[error("content generator returned no text")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session already exists: {session_id}")]
    AlreadyExists { session_id: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {0}")]
    Backend(String),
}
