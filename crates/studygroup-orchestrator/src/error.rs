use thiserror::Error;

use studygroup_core::error::{CoreError, GenerationError, StoreError};

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("session store failed: {0}")]
    Store(#[from] StoreError),

    #[error("unknown persona: {0}")]
    UnknownPersona(String),

    #[error("session not found: {0}")]
    SessionNotFound(String),

    #[error("session {session_id} does not belong to student {student_id}")]
    SessionOwner {
        session_id: String,
        student_id: String,
    },

    #[error("message must not be empty")]
    EmptyMessage,
}

impl From<CoreError> for OrchestratorError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::UnknownPersona(tag) => OrchestratorError::UnknownPersona(tag),
            CoreError::Serialization(e) => OrchestratorError::Store(StoreError::Serialization(e)),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}
