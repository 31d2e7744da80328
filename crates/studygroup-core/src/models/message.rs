use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::intent::Intent;
use super::persona::PersonaKind;

/// Who wrote a message in the session log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Student,
    Quizmaster,
    Explainer,
    Advocate,
    Motivator,
}

impl Speaker {
    pub fn persona(self) -> Option<PersonaKind> {
        match self {
            Speaker::Student => None,
            Speaker::Quizmaster => Some(PersonaKind::Quizmaster),
            Speaker::Explainer => Some(PersonaKind::Explainer),
            Speaker::Advocate => Some(PersonaKind::Advocate),
            Speaker::Motivator => Some(PersonaKind::Motivator),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speaker::Student => "student",
            Speaker::Quizmaster => "quizmaster",
            Speaker::Explainer => "explainer",
            Speaker::Advocate => "advocate",
            Speaker::Motivator => "motivator",
        }
    }
}

impl From<PersonaKind> for Speaker {
    fn from(kind: PersonaKind) -> Self {
        match kind {
            PersonaKind::Quizmaster => Speaker::Quizmaster,
            PersonaKind::Explainer => Speaker::Explainer,
            PersonaKind::Advocate => Speaker::Advocate,
            PersonaKind::Motivator => Speaker::Motivator,
        }
    }
}

/// One entry in a session's message log. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: jiff::Timestamp,
    #[serde(default)]
    pub metadata: MessageMetadata,
}

impl Message {
    pub fn new(
        speaker: Speaker,
        content: impl Into<String>,
        timestamp: jiff::Timestamp,
        metadata: MessageMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker,
            content: content.into(),
            timestamp,
            metadata,
        }
    }

    /// A student answer that went through evaluation and carries a
    /// correctness verdict.
    pub fn scored_correctness(&self) -> Option<bool> {
        if self.metadata.is_answer {
            self.metadata.is_correct
        } else {
            None
        }
    }
}

/// How deeply an evaluated answer demonstrates understanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Understanding {
    Deep,
    Surface,
    Unclear,
}

impl Understanding {
    pub fn from_tag(tag: &str) -> Understanding {
        match tag.trim().to_ascii_lowercase().as_str() {
            "deep" => Understanding::Deep,
            "surface" => Understanding::Surface,
            _ => Understanding::Unclear,
        }
    }
}

/// A persona's own recommendation to pass the student on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandoffSuggestion {
    pub to: PersonaKind,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Set on student answers that went through quiz scoring.
    #[serde(default)]
    pub is_answer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    /// 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub understanding: Option<Understanding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handoff_from: Option<PersonaKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_handoff: Option<HandoffSuggestion>,
}
