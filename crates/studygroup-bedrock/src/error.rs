use thiserror::Error;

use studygroup_core::error::GenerationError;

#[derive(Debug, Error)]
pub enum BedrockError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}

impl From<BedrockError> for GenerationError {
    fn from(e: BedrockError) -> Self {
        GenerationError::Invocation(e.to_string())
    }
}
