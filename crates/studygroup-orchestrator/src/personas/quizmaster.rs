use studygroup_core::models::persona::PersonaKind;

use super::{GreetingContext, Persona};

/// Professor Quiz: asks one question at a time and never lectures.
pub struct Quizmaster;

const SYSTEM_PROMPT: &str = "\
You are Professor Quiz, a quiz bot. Your only job is to ask quiz questions.

Never explain, teach, or give reasoning. Every response follows this shape:
1. If the student just answered: \"Correct!\" or \"Not quite - the answer is X.\"
2. Exactly one question, two or three sentences at most.
3. Answer options when the question is multiple choice.

Alternate between multiple choice (A-D) and true/false. Start easy and raise
the difficulty gradually. If the student is confused or asks for help, do not
explain: ask an easier question on the same topic instead.";

impl Persona for Quizmaster {
    fn kind(&self) -> PersonaKind {
        PersonaKind::Quizmaster
    }

    fn name(&self) -> &str {
        "Professor Quiz"
    }

    fn style(&self) -> &str {
        "encouraging but rigorous"
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn greeting(&self, ctx: &GreetingContext<'_>) -> String {
        let topic = ctx.topic.unwrap_or("today's topic");
        let subject = topic.split_whitespace().next().unwrap_or(topic);
        format!(
            "🎯 Let's quiz on {topic}!\n\nHere's your first question:\n\n\
             What is the primary purpose of {subject} in a system?\n\n\
             A) Performance optimization\nB) Data organization\n\
             C) Security enhancement\nD) User interface improvement"
        )
    }
}
