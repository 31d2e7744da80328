//! In-memory collaborators for driving the orchestrator in tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use studygroup_core::collaborators::{BoxFuture, ContentGenerator, PerformanceHistory, SessionStore};
use studygroup_core::error::{GenerationError, StoreError};
use studygroup_core::models::message::{Message, MessageMetadata, Speaker};
use studygroup_core::models::performance::PerformanceRecord;
use studygroup_core::models::session::Session;
use studygroup_core::models::student::StudentProfile;
use studygroup_orchestrator::Orchestrator;

/// Replays queued replies in order. An empty queue fails the call.
#[derive(Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<(String, bool)>>,
}

impl ScriptedGenerator {
    pub fn reply(&self, text: &str) -> &Self {
        self.replies.lock().unwrap().push_back(Ok(text.to_string()));
        self
    }

    pub fn fail(&self) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(GenerationError::Invocation("throttled".to_string())));
        self
    }

    /// Every prompt received, with its extended-reasoning flag.
    pub fn prompts(&self) -> Vec<(String, bool)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ContentGenerator for ScriptedGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        extended_reasoning: bool,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), extended_reasoning));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GenerationError::EmptyResponse))
        })
    }
}

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    pub fn insert(&self, session: Session) {
        self.sessions
            .lock()
            .unwrap()
            .insert(session.session_id.clone(), session);
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.lock().unwrap().get(session_id).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn find<'a>(
        &'a self,
        session_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Session>, StoreError>> {
        Box::pin(async move { Ok(self.get(session_id)) })
    }

    fn create(&self, session: Session) -> BoxFuture<'_, Result<Session, StoreError>> {
        Box::pin(async move {
            let mut sessions = self.sessions.lock().unwrap();
            if sessions.contains_key(&session.session_id) {
                return Err(StoreError::AlreadyExists {
                    session_id: session.session_id,
                });
            }
            sessions.insert(session.session_id.clone(), session.clone());
            Ok(session)
        })
    }

    fn save<'a>(&'a self, session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.insert(session.clone());
            Ok(())
        })
    }

    fn list_for_student<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Session>, StoreError>> {
        Box::pin(async move {
            let mut owned: Vec<Session> = self
                .sessions
                .lock()
                .unwrap()
                .values()
                .filter(|s| s.student_id == student_id)
                .cloned()
                .collect();
            owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            owned.truncate(limit);
            Ok(owned)
        })
    }
}

#[derive(Default)]
pub struct MemoryHistory {
    /// Most recent first.
    scores: Mutex<HashMap<String, Vec<f64>>>,
    records: Mutex<Vec<PerformanceRecord>>,
    profiles: Mutex<HashMap<String, StudentProfile>>,
}

impl MemoryHistory {
    pub fn with_scores(self, student_id: &str, scores: &[f64]) -> Self {
        self.scores
            .lock()
            .unwrap()
            .insert(student_id.to_string(), scores.to_vec());
        self
    }

    pub fn with_profile(self, profile: StudentProfile) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.student_id.clone(), profile);
        self
    }

    pub fn profile(&self, student_id: &str) -> Option<StudentProfile> {
        self.profiles.lock().unwrap().get(student_id).cloned()
    }
}

impl PerformanceHistory for MemoryHistory {
    fn recent_scores<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<f64>, StoreError>> {
        Box::pin(async move {
            let mut scores = self
                .scores
                .lock()
                .unwrap()
                .get(student_id)
                .cloned()
                .unwrap_or_default();
            scores.truncate(limit);
            Ok(scores)
        })
    }

    fn record<'a>(
        &'a self,
        record: &'a PerformanceRecord,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        })
    }

    fn student_profile<'a>(
        &'a self,
        student_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<StudentProfile>, StoreError>> {
        Box::pin(async move { Ok(self.profile(student_id)) })
    }

    fn save_student_profile<'a>(
        &'a self,
        profile: &'a StudentProfile,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.student_id.clone(), profile.clone());
            Ok(())
        })
    }
}

pub struct Harness {
    pub generator: Arc<ScriptedGenerator>,
    pub sessions: Arc<MemorySessionStore>,
    pub history: Arc<MemoryHistory>,
    pub orchestrator: Orchestrator,
}

pub fn harness() -> Harness {
    harness_with(MemoryHistory::default())
}

pub fn harness_with(history: MemoryHistory) -> Harness {
    let generator = Arc::new(ScriptedGenerator::default());
    let sessions = Arc::new(MemorySessionStore::default());
    let history = Arc::new(history);
    let orchestrator = Orchestrator::new(generator.clone(), sessions.clone(), history.clone());
    Harness {
        generator,
        sessions,
        history,
        orchestrator,
    }
}

pub fn ts(s: &str) -> jiff::Timestamp {
    s.parse().unwrap()
}

pub fn answer(correct: bool, at: jiff::Timestamp) -> Message {
    Message::new(
        Speaker::Student,
        "my answer",
        at,
        MessageMetadata {
            is_answer: true,
            is_correct: Some(correct),
            score: Some(if correct { 90.0 } else { 20.0 }),
            ..MessageMetadata::default()
        },
    )
}

pub fn answers(outcomes: &[bool]) -> Vec<Message> {
    let at = ts("2026-03-01T10:00:00Z");
    outcomes.iter().map(|&c| answer(c, at)).collect()
}

pub fn persona_json(message: &str) -> String {
    format!(r#"{{"message": "{message}", "intent": "explain", "confidence": 0.9, "handoff": null}}"#)
}
