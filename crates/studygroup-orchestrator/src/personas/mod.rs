//! The four scripted tutoring personas.

pub mod advocate;
pub mod explainer;
pub mod motivator;
pub mod quizmaster;

use studygroup_core::error::CoreError;
use studygroup_core::models::persona::PersonaKind;

/// What a persona may use to open a conversation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreetingContext<'a> {
    pub topic: Option<&'a str>,
    pub streak_days: u32,
}

/// Trait implemented by each tutoring persona.
pub trait Persona: Send + Sync {
    fn kind(&self) -> PersonaKind;

    /// Display name (e.g., "Professor Quiz").
    fn name(&self) -> &str;

    /// Role tag used in prompts and UI badges.
    fn role(&self) -> &str {
        self.kind().as_str()
    }

    /// Short description of the response style.
    fn style(&self) -> &str;

    fn system_prompt(&self) -> &str;

    /// Deterministic opening line, used when a persona is activated without
    /// a student message to answer.
    fn greeting(&self, ctx: &GreetingContext<'_>) -> String;
}

/// Return all registered personas, in selection order.
pub fn all_personas() -> Vec<Box<dyn Persona>> {
    PersonaKind::ALL.into_iter().map(persona).collect()
}

/// The persona implementing `kind`.
pub fn persona(kind: PersonaKind) -> Box<dyn Persona> {
    match kind {
        PersonaKind::Quizmaster => Box::new(quizmaster::Quizmaster),
        PersonaKind::Explainer => Box::new(explainer::Explainer),
        PersonaKind::Advocate => Box::new(advocate::Advocate),
        PersonaKind::Motivator => Box::new(motivator::Motivator),
    }
}

/// Look up a persona by its tag.
pub fn persona_for_tag(tag: &str) -> Result<Box<dyn Persona>, CoreError> {
    tag.parse::<PersonaKind>().map(persona)
}
