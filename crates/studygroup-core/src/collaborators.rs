//! Capabilities the orchestrator consumes but does not implement.
//!
//! Methods return boxed futures for dyn compatibility, so one orchestrator
//! can be wired to any backend at runtime.

use std::future::Future;
use std::pin::Pin;

use crate::error::{GenerationError, StoreError};
use crate::models::performance::PerformanceRecord;
use crate::models::session::Session;
use crate::models::student::StudentProfile;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// External text generation.
///
/// Output is expected, but not guaranteed, to contain a JSON object.
pub trait ContentGenerator: Send + Sync {
    /// Generate text for `prompt`. `extended_reasoning` selects the slower,
    /// more capable model.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        extended_reasoning: bool,
    ) -> BoxFuture<'a, Result<String, GenerationError>>;
}

/// Durable session documents, keyed by session id.
///
/// Session id uniqueness is enforced here, not by the orchestrator.
pub trait SessionStore: Send + Sync {
    fn find<'a>(
        &'a self,
        session_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<Session>, StoreError>>;

    /// Persist a new session. Fails with `StoreError::AlreadyExists` if the
    /// id is taken.
    fn create(&self, session: Session) -> BoxFuture<'_, Result<Session, StoreError>>;

    /// Overwrite a session. Last writer wins.
    fn save<'a>(&'a self, session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Sessions owned by a student, most recently created first.
    fn list_for_student<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Session>, StoreError>>;
}

/// Cross-session student history.
pub trait PerformanceHistory: Send + Sync {
    /// Past quiz scores, most recent first, at most `limit`.
    fn recent_scores<'a>(
        &'a self,
        student_id: &'a str,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<f64>, StoreError>>;

    fn record<'a>(
        &'a self,
        record: &'a PerformanceRecord,
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    fn student_profile<'a>(
        &'a self,
        student_id: &'a str,
    ) -> BoxFuture<'a, Result<Option<StudentProfile>, StoreError>>;

    fn save_student_profile<'a>(
        &'a self,
        profile: &'a StudentProfile,
    ) -> BoxFuture<'a, Result<(), StoreError>>;
}
