use serde::{Deserialize, Serialize};

/// One completed daily quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub student_id: String,
    pub day: u32,
    pub topic: String,
    /// 0–100.
    pub quiz_score: f64,
    #[serde(default)]
    pub questions_attempted: u32,
    #[serde(default)]
    pub questions_correct: u32,
    /// Minutes.
    pub time_spent: u32,
    #[serde(default)]
    pub mistakes: Vec<String>,
    pub difficulty: Difficulty,
    pub completed_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}
