//! The per-turn context snapshot fed to the score engine.
//!
//! Assembled fresh every turn from the session and the student's history.
//! Never cached or persisted.

use studygroup_core::models::message::Message;
use studygroup_core::models::persona::PersonaKind;
use studygroup_core::models::session::Session;
use studygroup_core::models::student::{ExplanationStyle, StudentProfile};

use crate::streak;

#[derive(Debug, Clone, Default)]
pub struct ContextSnapshot {
    pub topic: Option<String>,
    /// Mean of recent quiz scores, `None` without history.
    pub recent_score: Option<f64>,
    pub weak_topics: Vec<String>,
    pub streak_days: u32,
    pub session_minutes: i64,
    pub consecutive_correct: u32,
    pub consecutive_wrong: u32,
    pub last_persona: Option<PersonaKind>,
    /// Messages in the session before this turn.
    pub message_count: usize,
    pub explanation_style: ExplanationStyle,
    /// Most recent messages, oldest first.
    pub history: Vec<Message>,
}

impl ContextSnapshot {
    /// Build the snapshot for a turn against `session` as it stood before
    /// the turn's student message was appended.
    pub fn build(
        session: &Session,
        profile: Option<&StudentProfile>,
        recent_scores: &[f64],
        now: jiff::Timestamp,
        history_window: usize,
    ) -> Self {
        let start = session.messages.len().saturating_sub(history_window);

        Self {
            topic: session.topic.clone(),
            recent_score: mean(recent_scores),
            weak_topics: profile.map(|p| p.weak_topics.clone()).unwrap_or_default(),
            streak_days: profile.map(|p| p.streak_days).unwrap_or(0),
            session_minutes: session.elapsed_minutes(now),
            consecutive_correct: streak::consecutive_correct(&session.messages),
            consecutive_wrong: streak::consecutive_wrong(&session.messages),
            last_persona: session.active_persona,
            message_count: session.message_count(),
            explanation_style: profile.map(|p| p.explanation_style).unwrap_or_default(),
            history: session.messages[start..].to_vec(),
        }
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
