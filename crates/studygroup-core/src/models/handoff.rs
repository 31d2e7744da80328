use serde::{Deserialize, Serialize};

use super::persona::PersonaKind;

/// One recorded change of the active persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Handoff {
    /// `None` is the orchestrator sentinel: no persona was active yet.
    pub from: Option<PersonaKind>,
    pub to: PersonaKind,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<HandoffContext>,
    pub timestamp: jiff::Timestamp,
}

/// Snapshot of the signals that motivated a handoff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandoffContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consecutive_correct: Option<u32>,
}
