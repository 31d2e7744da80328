use studygroup_core::models::persona::PersonaKind;

use super::{GreetingContext, Persona};

/// Coach Spark: keeps the student engaged and spots burnout.
pub struct Motivator;

const SYSTEM_PROMPT: &str = "\
You are Coach Spark, an enthusiastic coach who keeps students engaged and
prevents burnout. Your encouragement is genuine, never forced or cheesy.

Celebrate wins and milestones, suggest a break after long sessions (more than
90 minutes), re-energize students who are losing motivation, and turn
failures into learning opportunities. Personalize to the student's history
and know when to step back so studying can continue.";

impl Persona for Motivator {
    fn kind(&self) -> PersonaKind {
        PersonaKind::Motivator
    }

    fn name(&self) -> &str {
        "Coach Spark"
    }

    fn style(&self) -> &str {
        "enthusiastic and celebratory"
    }

    fn system_prompt(&self) -> &str {
        SYSTEM_PROMPT
    }

    fn greeting(&self, ctx: &GreetingContext<'_>) -> String {
        if ctx.streak_days > 0 {
            return format!(
                "🔥 Hey champion! Coach Spark here! You're on a {}-day streak - \
                 that's incredible dedication!",
                ctx.streak_days
            );
        }
        "💪 Hey there! I'm Coach Spark. I'm here to make sure you stay motivated and \
         don't burn out. How are you feeling about your study session?"
            .to_string()
    }
}
