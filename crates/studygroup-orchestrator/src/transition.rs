//! Session state machine.
//!
//! Every change to a session goes through [`apply`], a pure function from
//! the current session and one event to the next session. Persistence is
//! the caller's job, after the transition.

use studygroup_core::models::handoff::{Handoff, HandoffContext};
use studygroup_core::models::message::{Message, MessageMetadata, Speaker};
use studygroup_core::models::persona::PersonaKind;
use studygroup_core::models::session::Session;

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The student said something (chat message or quiz answer).
    StudentMessage {
        content: String,
        metadata: MessageMetadata,
    },
    /// A quiz answer was scored; updates the running quiz totals.
    AnswerScored { score: f64, is_correct: bool },
    /// The score engine picked a persona for this turn. Records a handoff
    /// only when a different persona was already active.
    PersonaSelected {
        persona: PersonaKind,
        reason: String,
        context: Option<HandoffContext>,
    },
    /// A handoff that is always recorded, from an explicit source.
    Handoff {
        from: Option<PersonaKind>,
        to: PersonaKind,
        reason: String,
        context: Option<HandoffContext>,
    },
    /// A persona spoke.
    PersonaMessage {
        persona: PersonaKind,
        content: String,
        metadata: MessageMetadata,
    },
    /// A topic was detected or supplied. First write wins.
    TopicDetected(String),
}

/// Apply one event at time `at`.
pub fn apply(mut session: Session, event: SessionEvent, at: jiff::Timestamp) -> Session {
    match event {
        SessionEvent::StudentMessage { content, metadata } => {
            session
                .messages
                .push(Message::new(Speaker::Student, content, at, metadata));
        }
        SessionEvent::AnswerScored { score, is_correct } => {
            session.quiz_metrics.record(score, is_correct);
        }
        SessionEvent::PersonaSelected {
            persona,
            reason,
            context,
        } => {
            if let Some(previous) = session.active_persona
                && previous != persona
            {
                session.handoffs.push(Handoff {
                    from: Some(previous),
                    to: persona,
                    reason,
                    context,
                    timestamp: at,
                });
            }
            session.active_persona = Some(persona);
        }
        SessionEvent::Handoff {
            from,
            to,
            reason,
            context,
        } => {
            session.handoffs.push(Handoff {
                from,
                to,
                reason,
                context,
                timestamp: at,
            });
            session.active_persona = Some(to);
        }
        SessionEvent::PersonaMessage {
            persona,
            content,
            metadata,
        } => {
            session
                .messages
                .push(Message::new(Speaker::from(persona), content, at, metadata));
        }
        SessionEvent::TopicDetected(topic) => {
            if session.topic.is_none() && !topic.trim().is_empty() {
                session.topic = Some(topic);
            }
        }
    }
    session.updated_at = at;
    session
}

/// Apply a sequence of events at the same instant.
pub fn apply_all(
    session: Session,
    events: impl IntoIterator<Item = SessionEvent>,
    at: jiff::Timestamp,
) -> Session {
    events
        .into_iter()
        .fold(session, |session, event| apply(session, event, at))
}
