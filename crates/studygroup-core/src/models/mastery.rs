use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MasteryLevel {
    Beginner,
    Understanding,
    Practicing,
    Proficient,
    Mastered,
}

/// Leveled summary of a session's scored answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasteryProgress {
    pub level: MasteryLevel,
    /// 0–100, rounded.
    pub percentage: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    /// Rounded accuracy percentage.
    pub accuracy: u32,
    pub milestones: Milestones,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestones {
    pub understanding: bool,
    pub practicing: bool,
    pub proficient: bool,
    pub mastered: bool,
}
