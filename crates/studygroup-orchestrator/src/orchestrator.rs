//! The orchestration API: chat turns, quiz scoring, and manual persona
//! control over persisted sessions.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use studygroup_core::collaborators::{ContentGenerator, PerformanceHistory, SessionStore};
use studygroup_core::error::StoreError;
use studygroup_core::models::handoff::{Handoff, HandoffContext};
use studygroup_core::models::intent::Intent;
use studygroup_core::models::mastery::MasteryProgress;
use studygroup_core::models::message::{HandoffSuggestion, MessageMetadata, Understanding};
use studygroup_core::models::persona::PersonaKind;
use studygroup_core::models::session::{Session, SessionSummary};
use studygroup_core::models::student::StudentProfile;

use crate::config::OrchestratorConfig;
use crate::context::ContextSnapshot;
use crate::error::OrchestratorError;
use crate::escalation::{self, Escalation, EscalationRule};
use crate::intent;
use crate::mastery;
use crate::personas::{self, GreetingContext};
use crate::prompts;
use crate::reply::{self, AnswerEvaluation};
use crate::scoring::{self, PersonaScores};
use crate::streak;
use crate::transition::{self, SessionEvent};

type Clock = Arc<dyn Fn() -> jiff::Timestamp + Send + Sync>;

const AUTO_HANDOFF_NOTE: &str = "High performance auto-handoff";
const MANUAL_TRIGGER_REASON: &str = "Manual trigger";
const DEFAULT_HANDOFF_REASON: &str = "Agent initiated handoff";

// ── Results ──────────────────────────────────────────────────────────────────

/// Result of one chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub session_id: String,
    pub persona: PersonaKind,
    pub persona_display_name: String,
    pub response_text: String,
    pub metadata: TurnMetadata,
    pub mastery_progress: MasteryProgress,
    /// The most recent handoffs, oldest first.
    pub handoff_history: Vec<Handoff>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnMetadata {
    pub intent: Intent,
    pub intent_confidence: f64,
    pub topic: Option<String>,
    pub scores: PersonaScores,
    /// The persona's own label for its reply.
    pub reply_intent: Option<String>,
    pub reply_confidence: f64,
    /// A persona's recommendation; never executed automatically.
    pub suggested_handoff: Option<HandoffSuggestion>,
    pub session_minutes: i64,
    pub message_count: usize,
}

/// Result of scoring one quiz answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub session_id: String,
    pub is_correct: bool,
    pub score: f64,
    pub feedback: String,
    pub understanding: Understanding,
    pub quiz_metrics: QuizSummary,
    pub auto_handoff: Option<Escalation>,
    pub mastery_progress: MasteryProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub total: u32,
    pub correct: u32,
    /// Rounded percentage.
    pub accuracy: u32,
    /// Rounded rolling average.
    pub average_score: f64,
    pub consecutive_correct: u32,
}

/// Result of manually activating a persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaActivation {
    pub session_id: String,
    pub persona: PersonaKind,
    pub persona_display_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandoffOutcome {
    pub from_persona: Option<PersonaKind>,
    pub to_persona: PersonaKind,
    pub message: String,
}

// ── Orchestrator ─────────────────────────────────────────────────────────────

/// Coordinates the personas over sessions held by a [`SessionStore`].
///
/// Each call is one sequential unit of work. Concurrent calls against the
/// same session id are not serialized: the last save wins.
pub struct Orchestrator {
    generator: Arc<dyn ContentGenerator>,
    sessions: Arc<dyn SessionStore>,
    history: Arc<dyn PerformanceHistory>,
    config: OrchestratorConfig,
    clock: Clock,
}

impl Orchestrator {
    pub fn new(
        generator: Arc<dyn ContentGenerator>,
        sessions: Arc<dyn SessionStore>,
        history: Arc<dyn PerformanceHistory>,
    ) -> Self {
        Self {
            generator,
            sessions,
            history,
            config: OrchestratorConfig::default(),
            clock: Arc::new(jiff::Timestamp::now),
        }
    }

    pub fn with_config(mut self, config: OrchestratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the wall clock, e.g. to simulate long sessions.
    pub fn with_clock(mut self, clock: impl Fn() -> jiff::Timestamp + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Answer one student chat message with the best-fitting persona.
    ///
    /// If the persona's reply cannot be generated, the session is saved with
    /// only the student's message appended and the error is returned; the
    /// whole turn can be retried.
    pub async fn process_turn(
        &self,
        session_id: &str,
        student_id: &str,
        message: &str,
        topic_hint: Option<&str>,
    ) -> Result<TurnOutcome, OrchestratorError> {
        if message.trim().is_empty() {
            return Err(OrchestratorError::EmptyMessage);
        }
        let now = (self.clock)();

        let session = self.load_or_create(session_id, student_id, topic_hint, now).await?;
        let profile = self.history.student_profile(student_id).await?;
        let recent_scores = self
            .history
            .recent_scores(student_id, self.config.performance_limit)
            .await?;

        let ctx = ContextSnapshot::build(
            &session,
            profile.as_ref(),
            &recent_scores,
            now,
            self.config.history_window,
        );
        let guess = intent::classify(self.generator.as_ref(), message).await;

        let with_student = transition::apply(
            session,
            SessionEvent::StudentMessage {
                content: message.to_string(),
                metadata: MessageMetadata {
                    topic: topic_hint.map(str::to_string),
                    intent: Some(guess.intent),
                    confidence: Some(guess.confidence),
                    ..MessageMetadata::default()
                },
            },
            now,
        );

        let mut scores = scoring::score(&ctx);
        scoring::apply_intent_override(
            &mut scores,
            &guess,
            self.config.intent_override_confidence,
            self.config.intent_override_boost,
        );
        let selected = scores.select();
        let persona = personas::persona(selected);

        let topic = topic_hint.map(str::to_string).or_else(|| ctx.topic.clone());
        let prompt = prompts::persona_response(persona.as_ref(), message, &ctx, topic.as_deref());

        let text = match self.generator.generate(&prompt, true).await {
            Ok(text) => text,
            Err(e) => {
                warn!(session_id, persona = %selected, error = %e, "persona reply failed");
                self.sessions.save(&with_student).await?;
                return Err(e.into());
            }
        };
        let persona_reply = reply::parse_persona_reply(&text);

        let mut events = vec![
            SessionEvent::PersonaSelected {
                persona: selected,
                reason: format!("Student intent: {}, context-based selection", guess.intent),
                context: Some(HandoffContext {
                    topic: ctx.topic.clone(),
                    student_confidence: Some(guess.confidence),
                    ..HandoffContext::default()
                }),
            },
            SessionEvent::PersonaMessage {
                persona: selected,
                content: persona_reply.message.clone(),
                metadata: MessageMetadata {
                    topic: topic.clone(),
                    confidence: Some(persona_reply.confidence),
                    suggested_handoff: persona_reply.handoff.clone(),
                    ..MessageMetadata::default()
                },
            },
        ];
        events.extend(topic_hint.map(|t| SessionEvent::TopicDetected(t.to_string())));
        events.extend(guess.topic.clone().map(SessionEvent::TopicDetected));

        let session = transition::apply_all(with_student, events, now);
        self.sessions.save(&session).await?;

        info!(
            session_id,
            persona = %selected,
            intent = %guess.intent,
            messages = session.message_count(),
            handoffs = session.handoff_count(),
            "turn complete"
        );

        self.touch_engagement(profile, now).await;

        let recent_handoffs = session
            .handoffs
            .len()
            .saturating_sub(self.config.handoff_history_len);

        Ok(TurnOutcome {
            session_id: session.session_id.clone(),
            persona: selected,
            persona_display_name: persona.name().to_string(),
            response_text: persona_reply.message,
            metadata: TurnMetadata {
                intent: guess.intent,
                intent_confidence: guess.confidence,
                topic: session.topic.clone(),
                scores,
                reply_intent: persona_reply.intent,
                reply_confidence: persona_reply.confidence,
                suggested_handoff: persona_reply.handoff,
                session_minutes: ctx.session_minutes,
                message_count: session.message_count(),
            },
            mastery_progress: mastery::estimate(&session.messages),
            handoff_history: session.handoffs[recent_handoffs..].to_vec(),
        })
    }

    /// Score a free-form quiz answer and escalate to the advocate on a
    /// sustained high-accuracy streak.
    ///
    /// The session must already exist.
    pub async fn score_answer(
        &self,
        session_id: &str,
        student_id: &str,
        question: &str,
        student_answer: &str,
        correct_answer_hint: Option<&str>,
    ) -> Result<AnswerOutcome, OrchestratorError> {
        let now = (self.clock)();
        let session = self.load_existing(session_id, student_id).await?;

        let evaluation = self
            .evaluate_answer(question, student_answer, correct_answer_hint)
            .await;

        let mut session = transition::apply_all(
            session,
            [
                SessionEvent::StudentMessage {
                    content: student_answer.to_string(),
                    metadata: MessageMetadata {
                        is_answer: true,
                        question: Some(question.to_string()),
                        is_correct: Some(evaluation.is_correct),
                        score: Some(evaluation.score),
                        feedback: Some(evaluation.feedback.clone()),
                        understanding: Some(evaluation.understanding),
                        ..MessageMetadata::default()
                    },
                },
                SessionEvent::AnswerScored {
                    score: evaluation.score,
                    is_correct: evaluation.is_correct,
                },
            ],
            now,
        );

        let consecutive_correct = streak::consecutive_correct(&session.messages);
        let rule = EscalationRule {
            window: self.config.rolling_window,
            min_average: self.config.escalation_average,
            min_streak: self.config.escalation_streak,
        };
        let auto_handoff = escalation::evaluate(rule, &session.quiz_metrics, consecutive_correct);

        if let Some(escalation) = &auto_handoff {
            info!(
                session_id,
                average = escalation.average_score,
                consecutive_correct,
                "auto-escalating to advocate"
            );
            let advocate = personas::persona(escalation.to);
            let greeting = advocate.greeting(&GreetingContext {
                topic: session.topic.as_deref(),
                streak_days: 0,
            });
            let topic = session.topic.clone();
            session = transition::apply_all(
                session,
                [
                    SessionEvent::Handoff {
                        from: Some(escalation.from),
                        to: escalation.to,
                        reason: escalation.reason.clone(),
                        context: Some(HandoffContext {
                            topic,
                            student_confidence: None,
                            average_score: Some(escalation.average_score),
                            consecutive_correct: Some(escalation.consecutive_correct),
                        }),
                    },
                    SessionEvent::PersonaMessage {
                        persona: escalation.to,
                        content: greeting,
                        metadata: MessageMetadata {
                            handoff_from: Some(escalation.from),
                            reason: Some(AUTO_HANDOFF_NOTE.to_string()),
                            ..MessageMetadata::default()
                        },
                    },
                ],
                now,
            );
        }

        self.sessions.save(&session).await?;

        info!(
            session_id,
            score = evaluation.score,
            correct = evaluation.is_correct,
            "answer scored"
        );

        let metrics = &session.quiz_metrics;
        let quiz_metrics = QuizSummary {
            total: metrics.total_questions,
            correct: metrics.correct_answers,
            accuracy: metrics.accuracy_percent(),
            average_score: metrics
                .rolling_average(self.config.rolling_window)
                .unwrap_or(0.0)
                .round(),
            consecutive_correct,
        };

        Ok(AnswerOutcome {
            session_id: session.session_id.clone(),
            is_correct: evaluation.is_correct,
            score: evaluation.score,
            feedback: evaluation.feedback,
            understanding: evaluation.understanding,
            quiz_metrics,
            auto_handoff,
            mastery_progress: mastery::estimate(&session.messages),
        })
    }

    /// Activate a persona by tag and let it greet the student.
    pub async fn trigger_persona(
        &self,
        session_id: &str,
        student_id: &str,
        persona_tag: &str,
        topic: Option<&str>,
    ) -> Result<PersonaActivation, OrchestratorError> {
        let persona = personas::persona_for_tag(persona_tag)?;
        let kind = persona.kind();
        let now = (self.clock)();

        let session = self.load_or_create(session_id, student_id, topic, now).await?;
        let streak_days = self.streak_days(student_id).await?;

        let greeting = persona.greeting(&GreetingContext {
            topic: topic.or(session.topic.as_deref()),
            streak_days,
        });

        let mut events = Vec::new();
        if session.active_persona != Some(kind) {
            events.push(SessionEvent::Handoff {
                from: session.active_persona,
                to: kind,
                reason: MANUAL_TRIGGER_REASON.to_string(),
                context: None,
            });
        }
        events.push(SessionEvent::PersonaMessage {
            persona: kind,
            content: greeting.clone(),
            metadata: MessageMetadata {
                topic: topic.map(str::to_string),
                ..MessageMetadata::default()
            },
        });
        events.extend(topic.map(|t| SessionEvent::TopicDetected(t.to_string())));

        let session = transition::apply_all(session, events, now);
        self.sessions.save(&session).await?;

        info!(session_id, persona = %kind, "persona triggered");

        Ok(PersonaActivation {
            session_id: session.session_id,
            persona: kind,
            persona_display_name: persona.name().to_string(),
            message: greeting,
        })
    }

    /// Hand the session to another persona. Always records a handoff.
    pub async fn execute_handoff(
        &self,
        session_id: &str,
        student_id: &str,
        to_tag: &str,
        reason: Option<&str>,
    ) -> Result<HandoffOutcome, OrchestratorError> {
        let persona = personas::persona_for_tag(to_tag)?;
        let to = persona.kind();
        let now = (self.clock)();

        let session = self.load_existing(session_id, student_id).await?;
        let streak_days = self.streak_days(student_id).await?;
        let from = session.active_persona;

        let greeting = persona.greeting(&GreetingContext {
            topic: session.topic.as_deref(),
            streak_days,
        });
        let reason = reason.unwrap_or(DEFAULT_HANDOFF_REASON).to_string();
        let context = HandoffContext {
            topic: session.topic.clone(),
            ..HandoffContext::default()
        };

        let session = transition::apply_all(
            session,
            [
                SessionEvent::Handoff {
                    from,
                    to,
                    reason,
                    context: Some(context),
                },
                SessionEvent::PersonaMessage {
                    persona: to,
                    content: greeting.clone(),
                    metadata: MessageMetadata {
                        handoff_from: from,
                        ..MessageMetadata::default()
                    },
                },
            ],
            now,
        );
        self.sessions.save(&session).await?;

        info!(session_id, from = ?from, to = %to, "handoff executed");

        Ok(HandoffOutcome {
            from_persona: from,
            to_persona: to,
            message: greeting,
        })
    }

    pub async fn session_history(
        &self,
        session_id: &str,
    ) -> Result<Option<Session>, OrchestratorError> {
        Ok(self.sessions.find(session_id).await?)
    }

    pub async fn list_sessions(
        &self,
        student_id: &str,
        limit: usize,
    ) -> Result<Vec<SessionSummary>, OrchestratorError> {
        let sessions = self.sessions.list_for_student(student_id, limit).await?;
        Ok(sessions.iter().map(Session::summary).collect())
    }

    pub async fn mastery_for(&self, session_id: &str) -> Result<MasteryProgress, OrchestratorError> {
        let session = self
            .sessions
            .find(session_id)
            .await?
            .ok_or_else(|| OrchestratorError::SessionNotFound(session_id.to_string()))?;
        Ok(mastery::estimate(&session.messages))
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    async fn load_or_create(
        &self,
        session_id: &str,
        student_id: &str,
        topic: Option<&str>,
        now: jiff::Timestamp,
    ) -> Result<Session, OrchestratorError> {
        if let Some(session) = self.sessions.find(session_id).await? {
            check_owner(&session, student_id)?;
            return Ok(session);
        }

        info!(session_id, student_id, "creating session");
        let fresh = Session::new(session_id, student_id, topic.map(str::to_string), now);
        match self.sessions.create(fresh).await {
            Ok(session) => Ok(session),
            // Lost a creation race: use whatever the winner stored.
            Err(StoreError::AlreadyExists { .. }) => {
                warn!(session_id, "session created concurrently, reloading");
                self.load_existing(session_id, student_id).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn load_existing(
        &self,
        session_id: &str,
        student_id: &str,
    ) -> Result<Session, OrchestratorError> {
        let session = self
            .sessions
            .find(session_id)
            .await?
            .ok_or_else(|| OrchestratorError::SessionNotFound(session_id.to_string()))?;
        check_owner(&session, student_id)?;
        Ok(session)
    }

    async fn streak_days(&self, student_id: &str) -> Result<u32, OrchestratorError> {
        Ok(self
            .history
            .student_profile(student_id)
            .await?
            .map(|p| p.streak_days)
            .unwrap_or(0))
    }

    /// Never fails: any generator problem yields [`AnswerEvaluation::fallback`].
    async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        expected: Option<&str>,
    ) -> AnswerEvaluation {
        let prompt = prompts::answer_evaluation(question, answer, expected);
        match self.generator.generate(&prompt, false).await {
            Ok(text) => reply::parse_evaluation(&text).unwrap_or_else(|| {
                warn!("answer evaluation reply was not valid JSON, using fallback");
                AnswerEvaluation::fallback()
            }),
            Err(e) => {
                warn!(error = %e, "answer evaluation failed, using fallback");
                AnswerEvaluation::fallback()
            }
        }
    }

    async fn touch_engagement(&self, profile: Option<StudentProfile>, now: jiff::Timestamp) {
        let Some(mut profile) = profile else {
            return;
        };
        profile.record_activity(now);
        if let Err(e) = self.history.save_student_profile(&profile).await {
            warn!(
                student_id = %profile.student_id,
                error = %e,
                "failed to update engagement"
            );
        }
    }
}

fn check_owner(session: &Session, student_id: &str) -> Result<(), OrchestratorError> {
    if session.student_id == student_id {
        Ok(())
    } else {
        Err(OrchestratorError::SessionOwner {
            session_id: session.session_id.clone(),
            student_id: student_id.to_string(),
        })
    }
}
