//! Model and region selection, read from the environment.

use serde::{Deserialize, Serialize};

pub const REGION_VAR: &str = "STUDYGROUP_REGION";
pub const STANDARD_MODEL_VAR: &str = "STUDYGROUP_STANDARD_MODEL";
pub const REASONING_MODEL_VAR: &str = "STUDYGROUP_REASONING_MODEL";

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_STANDARD_MODEL: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";
const DEFAULT_REASONING_MODEL: &str = "us.anthropic.claude-sonnet-4-5-20250929-v1:0";
const DEFAULT_MAX_TOKENS: i32 = 2048;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BedrockConfig {
    pub region: String,
    /// Inference profile id for classification and answer evaluation.
    pub standard_model: String,
    /// Inference profile id for persona replies.
    pub reasoning_model: String,
    pub max_tokens: i32,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            standard_model: DEFAULT_STANDARD_MODEL.to_string(),
            reasoning_model: DEFAULT_REASONING_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl BedrockConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            region: get(REGION_VAR).unwrap_or(defaults.region),
            standard_model: get(STANDARD_MODEL_VAR).unwrap_or(defaults.standard_model),
            reasoning_model: get(REASONING_MODEL_VAR).unwrap_or(defaults.reasoning_model),
            max_tokens: defaults.max_tokens,
        }
    }

    pub fn model_for(&self, extended_reasoning: bool) -> &str {
        if extended_reasoning {
            &self.reasoning_model
        } else {
            &self.standard_model
        }
    }
}
