//! Mastery estimator: scored answers in a message log → leveled progress.

use studygroup_core::models::mastery::{MasteryLevel, MasteryProgress, Milestones};
use studygroup_core::models::message::Message;

use crate::streak;

/// A level gate: minimum answers and accuracy, and the percentage formula
/// that applies once both are met.
struct Gate {
    level: MasteryLevel,
    min_answers: u32,
    min_accuracy: f64,
    percentage: fn(answered: u32, accuracy: f64) -> f64,
}

/// Ascending; a later satisfied gate overrides an earlier one.
const GATES: [Gate; 4] = [
    Gate {
        level: MasteryLevel::Understanding,
        min_answers: 1,
        min_accuracy: 0.0,
        percentage: |answered, _| (f64::from(answered) * 5.0).min(25.0),
    },
    Gate {
        level: MasteryLevel::Practicing,
        min_answers: 3,
        min_accuracy: 50.0,
        percentage: |_, accuracy| 25.0 + ((accuracy - 50.0) * 0.5).min(25.0),
    },
    Gate {
        level: MasteryLevel::Proficient,
        min_answers: 5,
        min_accuracy: 70.0,
        percentage: |_, accuracy| 50.0 + ((accuracy - 70.0) * 0.8).min(25.0),
    },
    Gate {
        level: MasteryLevel::Mastered,
        min_answers: 8,
        min_accuracy: 85.0,
        percentage: |_, accuracy| 75.0 + ((accuracy - 85.0) * 1.5).min(25.0),
    },
];

/// Milestone thresholds on the unrounded percentage. The mastered milestone
/// sits at 95 even though the mastered level starts at 75.
const UNDERSTANDING_MILESTONE: f64 = 25.0;
const PRACTICING_MILESTONE: f64 = 50.0;
const PROFICIENT_MILESTONE: f64 = 75.0;
const MASTERED_MILESTONE: f64 = 95.0;

pub fn estimate(messages: &[Message]) -> MasteryProgress {
    let outcomes: Vec<bool> = streak::answer_outcomes(messages).collect();
    let answered = outcomes.len() as u32;
    let correct = outcomes.iter().filter(|&&c| c).count() as u32;

    if answered == 0 {
        return MasteryProgress {
            level: MasteryLevel::Beginner,
            percentage: 0,
            questions_answered: 0,
            correct_answers: 0,
            accuracy: 0,
            milestones: Milestones::default(),
        };
    }

    let accuracy = f64::from(correct) / f64::from(answered) * 100.0;

    let mut level = MasteryLevel::Beginner;
    let mut percentage = 0.0;
    for gate in &GATES {
        if answered >= gate.min_answers && accuracy >= gate.min_accuracy {
            level = gate.level;
            percentage = (gate.percentage)(answered, accuracy);
        }
    }

    MasteryProgress {
        level,
        percentage: percentage.clamp(0.0, 100.0).round() as u32,
        questions_answered: answered,
        correct_answers: correct,
        accuracy: accuracy.round() as u32,
        milestones: Milestones {
            understanding: percentage >= UNDERSTANDING_MILESTONE,
            practicing: percentage >= PRACTICING_MILESTONE,
            proficient: percentage >= PROFICIENT_MILESTONE,
            mastered: percentage >= MASTERED_MILESTONE,
        },
    }
}
