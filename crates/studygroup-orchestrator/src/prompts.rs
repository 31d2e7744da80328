//! Prompt templates sent to the content generator.

use crate::context::ContextSnapshot;
use crate::personas::{self, Persona};

pub fn intent_classification(message: &str) -> String {
    format!(
        "Classify the student's intent from this message: \"{message}\"\n\
         Intent options: explain, quiz, challenge, break, answer, greeting, topic_change, other\n\
         Return JSON: {{ \"intent\": \"...\", \"confidence\": 0.0-1.0, \"topic\": \"detected topic if any\" }}"
    )
}

pub fn answer_evaluation(question: &str, answer: &str, expected: Option<&str>) -> String {
    let expected_line = expected
        .map(|e| format!("EXPECTED ANSWER: {e}\n"))
        .unwrap_or_default();
    format!(
        "You are evaluating a student's answer.\n\n\
         QUESTION: {question}\n\
         STUDENT'S ANSWER: {answer}\n\
         {expected_line}\n\
         Evaluate the answer and respond with JSON:\n\
         {{\n  \"isCorrect\": true/false,\n  \"score\": 0-100 (percentage score),\n  \
         \"feedback\": \"Brief feedback message\",\n  \"understanding\": \"deep/surface/unclear\"\n}}\n\n\
         Be fair but rigorous. A partially correct answer should get partial credit."
    )
}

/// Full prompt for a persona answering the student's message.
pub fn persona_response(
    persona: &dyn Persona,
    message: &str,
    ctx: &ContextSnapshot,
    topic: Option<&str>,
) -> String {
    let history = ctx
        .history
        .iter()
        .map(|m| {
            let speaker = match m.speaker.persona() {
                Some(kind) => personas::persona(kind).name().to_string(),
                None => m.speaker.as_str().to_string(),
            };
            format!("{speaker}: {}", m.content)
        })
        .collect::<Vec<_>>()
        .join("\n");
    let history_block = if history.is_empty() {
        String::new()
    } else {
        format!("CONVERSATION HISTORY:\n{history}\n")
    };
    let performance = ctx
        .recent_score
        .map(|s| format!("{}% on recent quizzes", s.round()))
        .unwrap_or_else(|| "No recent data".to_string());
    let weak_topics = if ctx.weak_topics.is_empty() {
        "None identified".to_string()
    } else {
        ctx.weak_topics.join(", ")
    };

    format!(
        "{system}\n\n\
         YOUR ROLE: {role}\n\
         YOUR STYLE: {persona_style}\n\n\
         CURRENT CONTEXT:\n\
         - Topic: {topic}\n\
         - Student Performance: {performance}\n\
         - Session Duration: {minutes} minutes\n\
         - Student's Weak Topics: {weak_topics}\n\
         - Explanation Style Preference: {style}\n\n\
         {history_block}\n\
         STUDENT MESSAGE: \"{message}\"\n\n\
         Respond as {name} would. Be concise but helpful.\n\
         Your response MUST be valid JSON in this format:\n\
         {{\n  \"message\": \"Your response to the student\",\n  \
         \"intent\": \"explain|quiz|challenge|motivate|clarify\",\n  \
         \"confidence\": 0.0-1.0,\n  \
         \"handoff\": null or {{ \"to\": \"quizmaster|explainer|advocate|motivator\", \"reason\": \"why handoff is needed\" }}\n}}\n\n\
         Do not include markdown formatting outside the JSON.",
        system = persona.system_prompt(),
        topic = topic.unwrap_or("General study session"),
        minutes = ctx.session_minutes,
        style = ctx.explanation_style.as_str(),
        name = persona.name(),
        role = persona.role(),
        persona_style = persona.style(),
    )
}
