//! Auto-escalation: a sustained high-accuracy quiz streak forces a handoff
//! from the quizmaster to the advocate.

use serde::{Deserialize, Serialize};

use studygroup_core::models::persona::PersonaKind;
use studygroup_core::models::quiz::QuizMetrics;

/// A forced handoff and the reasoning trace shown to the student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Escalation {
    pub from: PersonaKind,
    pub to: PersonaKind,
    pub reason: String,
    /// Human-readable decision steps, in order.
    pub thinking: Vec<String>,
    pub average_score: f64,
    pub consecutive_correct: u32,
}

/// Thresholds for [`evaluate`].
#[derive(Debug, Clone, Copy)]
pub struct EscalationRule {
    pub window: usize,
    pub min_average: f64,
    pub min_streak: u32,
}

/// Decide whether the answer just recorded in `metrics` triggers escalation.
///
/// `metrics` must already include the latest score.
pub fn evaluate(
    rule: EscalationRule,
    metrics: &QuizMetrics,
    consecutive_correct: u32,
) -> Option<Escalation> {
    let recent = metrics.recent_scores(rule.window);
    let average = metrics.rolling_average(rule.window)?;
    let latest = metrics.last_score?;

    if average < rule.min_average || consecutive_correct < rule.min_streak {
        return None;
    }

    let rounded = average.round();
    Some(Escalation {
        from: PersonaKind::Quizmaster,
        to: PersonaKind::Advocate,
        reason: format!(
            "🔥 Impressive! {consecutive_correct} correct answers in a row with {rounded}% average. \
             Time for a real challenge!"
        ),
        thinking: vec![
            format!("Analyzing: Student scored {latest}% on this question"),
            format!(
                "Rolling average: {rounded}% over last {} questions",
                recent.len()
            ),
            format!("Consecutive correct: {consecutive_correct}"),
            format!(
                "Decision: average ≥ {}% and {consecutive_correct} ≥ {} in a row → \
                 Engaging The Challenger for mastery testing",
                rule.min_average, rule.min_streak
            ),
        ],
        average_score: average,
        consecutive_correct,
    })
}
