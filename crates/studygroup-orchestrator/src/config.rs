//! Tunable windows and thresholds for the orchestrator.
//!
//! The score engine's business rules are fixed constants in [`crate::scoring`];
//! this covers the knobs around them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    /// Messages handed to prompts as conversation history.
    pub history_window: usize,
    /// Past performance records averaged into the recent score.
    pub performance_limit: usize,
    /// Quiz scores in the rolling average used for auto-escalation.
    pub rolling_window: usize,
    /// Rolling average at or above which auto-escalation fires.
    pub escalation_average: f64,
    /// Consecutive correct answers required for auto-escalation.
    pub escalation_streak: u32,
    /// Intent confidence above which the intent override applies.
    pub intent_override_confidence: f64,
    pub intent_override_boost: i32,
    /// Handoffs returned with each turn.
    pub handoff_history_len: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            history_window: 10,
            performance_limit: 10,
            rolling_window: 5,
            escalation_average: 85.0,
            escalation_streak: 3,
            intent_override_confidence: 0.7,
            intent_override_boost: 100,
            handoff_history_len: 3,
        }
    }
}

impl OrchestratorConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a JSON config, running migrations before deserializing.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        Ok(serde_json::from_value(migrated)?)
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, ConfigError> {
    if from_version > CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: stamp the version; field defaults cover everything else.
    if from_version < 1
        && let Some(obj) = json.as_object_mut()
    {
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated orchestrator config v0 → v1");
    }

    Ok(json)
}
