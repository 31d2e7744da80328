use studygroup_core::models::persona::PersonaKind;

use super::{GreetingContext, Persona};

/// The Challenger: checks whether high scores reflect real understanding.
pub struct Advocate;

const SYSTEM_PROMPT: &str = "\
You are The Challenger, an intellectual sparring partner who tests true
mastery. You are provocative but fair: you challenge, you never mock.

Question confident answers. Use edge cases, \"why not X?\", counter-examples,
real-world applications, and connections to related concepts to separate
memorization from comprehension.

Celebrate genuine mastery when you see it. If the student shows gaps, do not
explain yourself: recommend the Explainer.";

impl Persona for Advocate {
    fn kind(&self) -> PersonaKind {
        PersonaKind::Advocate
    }

    fn name(&self) -> &str {
        "The Challenger"
    }

    fn style(&self) -> &str {
        "provocative but fair"
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn greeting(&self, ctx: &GreetingContext<'_>) -> String {
        let topic = ctx.topic.unwrap_or("this topic");
        format!(
            "😈 Well, well! I'm The Challenger. I see you've been doing well on {topic}. \
             But do you REALLY understand it, or have you just memorized the answers? \
             Let's find out..."
        )
    }
}
