use studygroup_core::models::message::{Message, MessageMetadata, Speaker};
use studygroup_core::models::persona::PersonaKind;
use studygroup_orchestrator::context::ContextSnapshot;
use studygroup_orchestrator::personas;
use studygroup_orchestrator::prompts;

fn at() -> jiff::Timestamp {
    "2026-03-01T10:00:00Z".parse().unwrap()
}

#[test]
fn persona_prompt_carries_role_and_style() {
    let persona = personas::persona(PersonaKind::Quizmaster);
    let prompt = prompts::persona_response(
        persona.as_ref(),
        "quiz me",
        &ContextSnapshot::default(),
        Some("fractions"),
    );

    assert!(prompt.starts_with(persona.system_prompt()));
    assert!(prompt.contains("YOUR ROLE: quizmaster"));
    assert!(prompt.contains(&format!("YOUR STYLE: {}", persona.style())));
    assert!(prompt.contains("- Topic: fractions"));
    assert!(prompt.contains("Respond as Professor Quiz would."));
    assert!(!prompt.contains("CONVERSATION HISTORY"));
}

#[test]
fn history_names_personas_by_display_name() {
    let ctx = ContextSnapshot {
        history: vec![
            Message::new(Speaker::Student, "what is a fraction?", at(), MessageMetadata::default()),
            Message::new(Speaker::Explainer, "A part of a whole.", at(), MessageMetadata::default()),
        ],
        ..ContextSnapshot::default()
    };
    let persona = personas::persona(PersonaKind::Quizmaster);
    let prompt = prompts::persona_response(persona.as_ref(), "ok", &ctx, None);

    assert!(prompt.contains(
        "CONVERSATION HISTORY:\nstudent: what is a fraction?\nDr. Clarity: A part of a whole.\n"
    ));
    assert!(prompt.contains("- Topic: General study session"));
}
