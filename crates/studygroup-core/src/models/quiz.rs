use serde::{Deserialize, Serialize};

/// Running quiz totals embedded in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizMetrics {
    pub total_questions: u32,
    pub correct_answers: u32,
    /// Per-question percentage scores in answer order.
    pub scores: Vec<f64>,
    pub last_score: Option<f64>,
}

impl QuizMetrics {
    pub fn record(&mut self, score: f64, is_correct: bool) {
        self.total_questions += 1;
        if is_correct {
            self.correct_answers += 1;
        }
        self.scores.push(score);
        self.last_score = Some(score);
    }

    /// The trailing scores the rolling average is computed over.
    pub fn recent_scores(&self, window: usize) -> &[f64] {
        let start = self.scores.len().saturating_sub(window);
        &self.scores[start..]
    }

    /// Mean of the last `window` scores, or `None` before any answer.
    pub fn rolling_average(&self, window: usize) -> Option<f64> {
        let recent = self.recent_scores(window);
        if recent.is_empty() {
            return None;
        }
        Some(recent.iter().sum::<f64>() / recent.len() as f64)
    }

    /// Correct answers as a whole percentage, 0 before any answer.
    pub fn accuracy_percent(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        (f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0).round() as u32
    }
}
