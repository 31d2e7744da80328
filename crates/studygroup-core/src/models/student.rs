use serde::{Deserialize, Serialize};

/// Per-student preferences and engagement, owned by the performance
/// history collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub student_id: String,
    #[serde(default)]
    pub weak_topics: Vec<String>,
    #[serde(default)]
    pub explanation_style: ExplanationStyle,
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub last_active_at: Option<jiff::Timestamp>,
}

impl StudentProfile {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            weak_topics: Vec::new(),
            explanation_style: ExplanationStyle::default(),
            streak_days: 0,
            last_active_at: None,
        }
    }

    /// Record study activity at `now`, advancing the day-over-day streak.
    ///
    /// Days are UTC calendar days. Activity on the day after the last one
    /// extends the streak, activity on the same day leaves it unchanged, and
    /// anything else starts a new streak of one.
    pub fn record_activity(&mut self, now: jiff::Timestamp) {
        let today = utc_date(now);
        self.streak_days = match self.last_active_at.map(utc_date) {
            Some(last) if last == today => self.streak_days.max(1),
            Some(last) if last.tomorrow().ok() == Some(today) => self.streak_days + 1,
            _ => 1,
        };
        self.last_active_at = Some(now);
    }
}

fn utc_date(ts: jiff::Timestamp) -> jiff::civil::Date {
    ts.to_zoned(jiff::tz::TimeZone::UTC).date()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationStyle {
    #[default]
    Analogies,
    Technical,
    Visual,
    #[serde(rename = "step-by-step")]
    StepByStep,
}

impl ExplanationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            ExplanationStyle::Analogies => "analogies",
            ExplanationStyle::Technical => "technical",
            ExplanationStyle::Visual => "visual",
            ExplanationStyle::StepByStep => "step-by-step",
        }
    }
}
