use studygroup_core::models::persona::PersonaKind;
use studygroup_orchestrator::OrchestratorError;
use studygroup_orchestrator::personas::{self, GreetingContext};

#[test]
fn registry_lists_all_four_in_order() {
    let kinds: Vec<PersonaKind> = personas::all_personas().iter().map(|p| p.kind()).collect();
    assert_eq!(kinds, PersonaKind::ALL);
}

#[test]
fn display_names() {
    let names: Vec<String> = personas::all_personas()
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(
        names,
        ["Professor Quiz", "Dr. Clarity", "The Challenger", "Coach Spark"]
    );
}

#[test]
fn roles_match_tags() {
    for persona in personas::all_personas() {
        assert_eq!(persona.role(), persona.kind().as_str());
        assert!(!persona.system_prompt().is_empty());
        assert!(!persona.style().is_empty());
    }
}

#[test]
fn lookup_by_tag() {
    let persona = personas::persona_for_tag("advocate").unwrap();
    assert_eq!(persona.kind(), PersonaKind::Advocate);

    let err = OrchestratorError::from(personas::persona_for_tag("wizard").err().unwrap());
    assert!(matches!(err, OrchestratorError::UnknownPersona(tag) if tag == "wizard"));
}

#[test]
fn greetings_mention_topic() {
    let ctx = GreetingContext {
        topic: Some("binary trees"),
        streak_days: 0,
    };
    let quiz = personas::persona(PersonaKind::Quizmaster).greeting(&ctx);
    assert!(quiz.starts_with("🎯 Let's quiz on binary trees!"));
    assert!(quiz.contains("purpose of binary in a system"));

    let explainer = personas::persona(PersonaKind::Explainer).greeting(&ctx);
    assert!(explainer.contains("understanding binary trees"));

    let advocate = personas::persona(PersonaKind::Advocate).greeting(&GreetingContext::default());
    assert!(advocate.contains("doing well on this topic"));
}

#[test]
fn motivator_celebrates_streaks() {
    let motivator = personas::persona(PersonaKind::Motivator);
    let streak = motivator.greeting(&GreetingContext {
        topic: None,
        streak_days: 4,
    });
    assert!(streak.contains("4-day streak"));

    let plain = motivator.greeting(&GreetingContext::default());
    assert!(plain.starts_with("💪 Hey there! I'm Coach Spark."));
}
