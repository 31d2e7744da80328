pub mod handoff;
pub mod intent;
pub mod mastery;
pub mod message;
pub mod performance;
pub mod persona;
pub mod quiz;
pub mod session;
pub mod student;
