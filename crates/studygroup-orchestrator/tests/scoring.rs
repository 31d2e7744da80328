use studygroup_core::models::intent::{Intent, IntentGuess};
use studygroup_core::models::persona::PersonaKind;
use studygroup_orchestrator::context::ContextSnapshot;
use studygroup_orchestrator::scoring::{self, COOLDOWN_PENALTY, PersonaScores};

fn mid_session() -> ContextSnapshot {
    ContextSnapshot {
        message_count: 4,
        ..ContextSnapshot::default()
    }
}

#[test]
fn equal_scores_select_quizmaster() {
    let scores = PersonaScores {
        quizmaster: 10,
        explainer: 10,
        advocate: 10,
        motivator: 10,
    };
    assert_eq!(scores.select(), PersonaKind::Quizmaster);
    assert_eq!(PersonaScores::default().select(), PersonaKind::Quizmaster);
}

#[test]
fn ties_below_quizmaster_resolve_in_declaration_order() {
    let scores = PersonaScores {
        quizmaster: 5,
        explainer: 30,
        advocate: 30,
        motivator: 30,
    };
    assert_eq!(scores.select(), PersonaKind::Explainer);
}

#[test]
fn cold_start_leans_toward_introductions() {
    let scores = scoring::score(&ContextSnapshot::default());
    assert_eq!(
        scores,
        PersonaScores {
            quizmaster: 40,
            explainer: 30,
            advocate: 0,
            motivator: 0,
        }
    );
}

#[test]
fn cold_start_with_explain_intent_picks_explainer() {
    let mut scores = scoring::score(&ContextSnapshot::default());
    let boosted = scoring::apply_intent_override(
        &mut scores,
        &IntentGuess::new(Intent::Explain, 0.9),
        0.7,
        100,
    );

    assert_eq!(boosted, Some(PersonaKind::Explainer));
    assert_eq!(scores.explainer, 130);
    assert_eq!(scores.select(), PersonaKind::Explainer);
}

#[test]
fn wrong_streak_after_quizmaster_picks_explainer() {
    let ctx = ContextSnapshot {
        recent_score: Some(40.0),
        consecutive_wrong: 3,
        last_persona: Some(PersonaKind::Quizmaster),
        ..mid_session()
    };
    let mut scores = scoring::score(&ctx);
    let boosted = scoring::apply_intent_override(
        &mut scores,
        &IntentGuess::new(Intent::Answer, 0.9),
        0.7,
        100,
    );

    assert_eq!(boosted, None);
    assert_eq!(scores.quizmaster, 10);
    assert_eq!(scores.explainer, 130);
    assert_eq!(scores.motivator, 20);
    assert_eq!(scores.select(), PersonaKind::Explainer);
}

#[test]
fn cooldown_is_exactly_twenty() {
    for kind in PersonaKind::ALL {
        let without = scoring::score(&mid_session());
        let with = scoring::score(&ContextSnapshot {
            last_persona: Some(kind),
            ..mid_session()
        });
        assert_eq!(without.get(kind) - with.get(kind), COOLDOWN_PENALTY);
        assert_eq!(COOLDOWN_PENALTY, 20);
    }
}

#[test]
fn recent_score_band_edges() {
    let baseline = scoring::score(&mid_session());
    for neutral in [70.0, 77.5, 85.0] {
        let scores = scoring::score(&ContextSnapshot {
            recent_score: Some(neutral),
            ..mid_session()
        });
        assert_eq!(scores, baseline, "score {neutral} should be neutral");
    }

    let struggling = scoring::score(&ContextSnapshot {
        recent_score: Some(69.9),
        ..mid_session()
    });
    assert_eq!(struggling.explainer, 30);
    assert_eq!(struggling.quizmaster, 70);

    let strong = scoring::score(&ContextSnapshot {
        recent_score: Some(85.1),
        ..mid_session()
    });
    assert_eq!(strong.advocate, 50);
    assert_eq!(strong.quizmaster, 40);
}

#[test]
fn long_correct_streak_favors_advocate() {
    let scores = scoring::score(&ContextSnapshot {
        consecutive_correct: 5,
        ..mid_session()
    });
    assert_eq!(scores.advocate, 60);
    assert_eq!(scores.motivator, 30);
    assert_eq!(scores.select(), PersonaKind::Advocate);
}

#[test]
fn session_length_tiers() {
    let at = |minutes| {
        scoring::score(&ContextSnapshot {
            session_minutes: minutes,
            ..mid_session()
        })
        .motivator
    };
    assert_eq!(at(60), 0);
    assert_eq!(at(61), 30);
    assert_eq!(at(90), 30);
    assert_eq!(at(91), 80);
}

#[test]
fn long_streak_only_counts_early_in_session() {
    let early = scoring::score(&ContextSnapshot {
        streak_days: 7,
        message_count: 1,
        ..ContextSnapshot::default()
    });
    assert_eq!(early.motivator, 50);

    // Second turn: student, persona, then the new student message.
    let later = scoring::score(&ContextSnapshot {
        streak_days: 7,
        message_count: 2,
        ..ContextSnapshot::default()
    });
    assert_eq!(later.motivator, 0);
}

#[test]
fn intent_override_requires_confidence_above_threshold() {
    let mut scores = PersonaScores::default();
    let boosted = scoring::apply_intent_override(
        &mut scores,
        &IntentGuess::new(Intent::Break, 0.7),
        0.7,
        100,
    );
    assert_eq!(boosted, None);
    assert_eq!(scores, PersonaScores::default());

    let boosted = scoring::apply_intent_override(
        &mut scores,
        &IntentGuess::new(Intent::Break, 0.71),
        0.7,
        100,
    );
    assert_eq!(boosted, Some(PersonaKind::Motivator));
    assert_eq!(scores.motivator, 100);
}
