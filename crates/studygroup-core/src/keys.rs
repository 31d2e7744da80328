//! Storage key conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the
//! canonical layout of documents in the study group bucket.

use jiff::Timestamp;

pub const SESSIONS_PREFIX: &str = "sessions/";

pub fn session(session_id: &str) -> String {
    format!("sessions/{session_id}.json")
}

pub fn student(student_id: &str) -> String {
    format!("students/{student_id}.json")
}

pub fn performance_prefix(student_id: &str) -> String {
    format!("performance/{student_id}/")
}

/// One performance record per completed quiz, named by completion time.
pub fn performance_record(student_id: &str, completed_at: Timestamp) -> String {
    format!("performance/{student_id}/{completed_at}.json")
}
