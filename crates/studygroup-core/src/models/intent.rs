use std::fmt;

use serde::{Deserialize, Serialize};

use super::persona::PersonaKind;

/// What the student is asking for in a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Explain,
    Quiz,
    Challenge,
    Break,
    Answer,
    Greeting,
    TopicChange,
    Other,
}

impl Intent {
    /// Parse a free-form tag; anything outside the fixed set is `Other`.
    pub fn from_tag(tag: &str) -> Intent {
        match tag.trim().to_ascii_lowercase().as_str() {
            "explain" => Intent::Explain,
            "quiz" => Intent::Quiz,
            "challenge" => Intent::Challenge,
            "break" => Intent::Break,
            "answer" => Intent::Answer,
            "greeting" => Intent::Greeting,
            "topic_change" => Intent::TopicChange,
            _ => Intent::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Explain => "explain",
            Intent::Quiz => "quiz",
            Intent::Challenge => "challenge",
            Intent::Break => "break",
            Intent::Answer => "answer",
            Intent::Greeting => "greeting",
            Intent::TopicChange => "topic_change",
            Intent::Other => "other",
        }
    }

    /// The persona an explicit intent asks for, if any.
    pub fn preferred_persona(self) -> Option<PersonaKind> {
        match self {
            Intent::Explain => Some(PersonaKind::Explainer),
            Intent::Quiz => Some(PersonaKind::Quizmaster),
            Intent::Challenge => Some(PersonaKind::Advocate),
            Intent::Break => Some(PersonaKind::Motivator),
            _ => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one student message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentGuess {
    pub intent: Intent,
    /// 0.0–1.0.
    pub confidence: f64,
    pub topic: Option<String>,
}

impl IntentGuess {
    pub fn new(intent: Intent, confidence: f64) -> Self {
        Self {
            intent,
            confidence,
            topic: None,
        }
    }

    /// Low-confidence fallback used whenever classification cannot decide.
    pub fn fallback() -> Self {
        Self::new(Intent::Other, 0.5)
    }
}
