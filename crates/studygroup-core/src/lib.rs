//! studygroup-core
//!
//! Pure domain types, storage key conventions, and the collaborator traits
//! the orchestrator depends on. No AWS SDK dependency; this is the shared
//! vocabulary of the study group system.

pub mod collaborators;
pub mod error;
pub mod keys;
pub mod models;
