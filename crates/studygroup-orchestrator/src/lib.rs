//! studygroup-orchestrator
//!
//! Persona selection and handoff engine. Decides which tutoring persona
//! answers each student turn, records handoffs, scores quiz answers, and
//! derives mastery progress. Text generation and persistence are consumed
//! through the traits in `studygroup_core::collaborators`.

pub mod config;
pub mod context;
pub mod error;
pub mod escalation;
pub mod intent;
pub mod mastery;
pub mod orchestrator;
pub mod personas;
pub mod prompts;
pub mod reply;
pub mod scoring;
pub mod streak;
pub mod transition;

pub use error::OrchestratorError;
pub use orchestrator::Orchestrator;
