use serde::{Deserialize, Serialize};

use super::handoff::Handoff;
use super::message::Message;
use super::persona::PersonaKind;
use super::quiz::QuizMetrics;

/// A continuous tutoring interaction between one student and the personas.
///
/// The message and handoff logs are append-only. Counts are always derived
/// from the logs and never stored on their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub student_id: String,
    /// First write wins.
    pub topic: Option<String>,
    pub active_persona: Option<PersonaKind>,
    pub status: SessionStatus,
    pub messages: Vec<Message>,
    pub handoffs: Vec<Handoff>,
    #[serde(default)]
    pub quiz_metrics: QuizMetrics,
    pub started_at: jiff::Timestamp,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Session {
    pub fn new(
        session_id: impl Into<String>,
        student_id: impl Into<String>,
        topic: Option<String>,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            student_id: student_id.into(),
            topic,
            active_persona: None,
            status: SessionStatus::Active,
            messages: Vec::new(),
            handoffs: Vec::new(),
            quiz_metrics: QuizMetrics::default(),
            started_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn handoff_count(&self) -> usize {
        self.handoffs.len()
    }

    /// Whole minutes elapsed since the session started.
    pub fn elapsed_minutes(&self, now: jiff::Timestamp) -> i64 {
        now.duration_since(self.started_at).as_secs().max(0) / 60
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.session_id.clone(),
            topic: self.topic.clone(),
            status: self.status,
            active_persona: self.active_persona,
            message_count: self.message_count(),
            handoff_count: self.handoff_count(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
    Paused,
}

/// Listing view of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub topic: Option<String>,
    pub status: SessionStatus,
    pub active_persona: Option<PersonaKind>,
    pub message_count: usize,
    pub handoff_count: usize,
    pub created_at: jiff::Timestamp,
}
