//! Score engine: context snapshot → per-persona scores.
//!
//! Pure and deterministic. All rules are additive adjustments on a base
//! score; the caller layers the intent override on top.

use serde::{Deserialize, Serialize};

use studygroup_core::models::intent::IntentGuess;
use studygroup_core::models::persona::PersonaKind;

use crate::context::ContextSnapshot;

/// Penalty applied to whichever persona answered last turn.
pub const COOLDOWN_PENALTY: i32 = 20;

/// Signed score per persona. Higher is a better fit for this turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaScores {
    pub quizmaster: i32,
    pub explainer: i32,
    pub advocate: i32,
    pub motivator: i32,
}

impl PersonaScores {
    pub fn get(&self, kind: PersonaKind) -> i32 {
        match kind {
            PersonaKind::Quizmaster => self.quizmaster,
            PersonaKind::Explainer => self.explainer,
            PersonaKind::Advocate => self.advocate,
            PersonaKind::Motivator => self.motivator,
        }
    }

    pub fn add(&mut self, kind: PersonaKind, delta: i32) {
        let slot = match kind {
            PersonaKind::Quizmaster => &mut self.quizmaster,
            PersonaKind::Explainer => &mut self.explainer,
            PersonaKind::Advocate => &mut self.advocate,
            PersonaKind::Motivator => &mut self.motivator,
        };
        *slot += delta;
    }

    /// The highest-scoring persona.
    ///
    /// Starts from the quizmaster and only replaces the current best on a
    /// strictly greater score, so ties resolve toward the quizmaster and then
    /// toward declaration order.
    pub fn select(&self) -> PersonaKind {
        let mut best = PersonaKind::Quizmaster;
        let mut best_score = self.quizmaster;
        for kind in PersonaKind::ALL {
            let score = self.get(kind);
            if score > best_score {
                best = kind;
                best_score = score;
            }
        }
        best
    }
}

/// Compute per-persona scores for one turn.
pub fn score(ctx: &ContextSnapshot) -> PersonaScores {
    use PersonaKind::*;

    // A brand-new session leans toward the introducing personas.
    let mut scores = if ctx.message_count == 0 {
        PersonaScores {
            quizmaster: 40,
            explainer: 30,
            ..PersonaScores::default()
        }
    } else {
        PersonaScores {
            quizmaster: 50,
            ..PersonaScores::default()
        }
    };

    // 70–85 inclusive is a neutral band: no adjustment.
    if let Some(recent) = ctx.recent_score {
        if recent < 50.0 {
            scores.add(Explainer, 60);
            scores.add(Quizmaster, -20);
        } else if recent < 70.0 {
            scores.add(Explainer, 30);
            scores.add(Quizmaster, 20);
        } else if recent > 85.0 {
            scores.add(Advocate, 50);
            scores.add(Quizmaster, -10);
        }
    }

    if ctx.consecutive_wrong >= 3 {
        scores.add(Explainer, 70);
        scores.add(Motivator, 20);
    }
    if ctx.consecutive_correct >= 5 {
        scores.add(Advocate, 60);
        scores.add(Motivator, 30);
    }

    if ctx.session_minutes > 90 {
        scores.add(Motivator, 80);
    } else if ctx.session_minutes > 60 {
        scores.add(Motivator, 30);
    }

    // Celebrate a long streak, but only as the session opens. The count
    // here includes the student message being answered.
    if ctx.streak_days >= 7 && ctx.message_count + 1 < 3 {
        scores.add(Motivator, 50);
    }

    if let Some(last) = ctx.last_persona {
        scores.add(last, -COOLDOWN_PENALTY);
    }

    scores
}

/// Boost the persona an explicit, confident intent asks for.
///
/// Returns the boosted persona, if any.
pub fn apply_intent_override(
    scores: &mut PersonaScores,
    guess: &IntentGuess,
    min_confidence: f64,
    boost: i32,
) -> Option<PersonaKind> {
    if guess.confidence <= min_confidence {
        return None;
    }
    let target = guess.intent.preferred_persona()?;
    scores.add(target, boost);
    Some(target)
}
