//! Parse-or-fallback boundary for generator output.
//!
//! Generator text is untrusted: it may wrap JSON in markdown fences, add
//! prose around it, or not contain JSON at all. Everything past this module
//! works with typed values only.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use studygroup_core::models::intent::{Intent, IntentGuess};
use studygroup_core::models::message::{HandoffSuggestion, Understanding};
use studygroup_core::models::persona::PersonaKind;

/// Remove markdown code fence markers (```json and ```), keeping their
/// contents.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// The first balanced `{...}` span in `text`.
///
/// Braces inside JSON string literals are ignored. Returns `None` when no
/// object opens or the first one never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Deserialize the first JSON object embedded in generator output.
pub fn parse_json_reply<T: DeserializeOwned>(text: &str) -> Option<T> {
    let cleaned = strip_code_fences(text);
    let object = extract_json_object(&cleaned)?;
    serde_json::from_str(object).ok()
}

// ── Intent classification ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawIntent {
    intent: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    topic: Option<String>,
}

/// Parse a classification reply, or `None` if it is unusable.
pub fn parse_intent(text: &str) -> Option<IntentGuess> {
    let raw: RawIntent = parse_json_reply(text)?;
    Some(IntentGuess {
        intent: Intent::from_tag(&raw.intent),
        confidence: raw.confidence.unwrap_or(0.5).clamp(0.0, 1.0),
        topic: raw
            .topic
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()),
    })
}

// ── Answer evaluation ────────────────────────────────────────────────────────

/// Verdict on one free-form quiz answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerEvaluation {
    pub is_correct: bool,
    /// 0–100.
    pub score: f64,
    pub feedback: String,
    pub understanding: Understanding,
}

impl AnswerEvaluation {
    /// Used whenever the generator's verdict cannot be obtained.
    pub fn fallback() -> Self {
        Self {
            is_correct: false,
            score: 0.0,
            feedback: "Unable to evaluate answer. Please try again.".to_string(),
            understanding: Understanding::Unclear,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEvaluation {
    is_correct: bool,
    score: f64,
    #[serde(default)]
    feedback: String,
    #[serde(default)]
    understanding: Option<String>,
}

pub fn parse_evaluation(text: &str) -> Option<AnswerEvaluation> {
    let raw: RawEvaluation = parse_json_reply(text)?;
    if !raw.score.is_finite() {
        return None;
    }
    Some(AnswerEvaluation {
        is_correct: raw.is_correct,
        score: raw.score.clamp(0.0, 100.0),
        feedback: raw.feedback,
        understanding: raw
            .understanding
            .as_deref()
            .map(Understanding::from_tag)
            .unwrap_or(Understanding::Unclear),
    })
}

// ── Persona replies ──────────────────────────────────────────────────────────

const DEFAULT_REPLY_CONFIDENCE: f64 = 0.8;
const PLAIN_TEXT_CONFIDENCE: f64 = 0.5;
const EMPTY_REPLY: &str = "I apologize, I had trouble generating a response.";

/// A persona's structured reply to the student.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaReply {
    pub message: String,
    /// The persona's own label for what it did (explain, quiz, ...).
    pub intent: Option<String>,
    pub confidence: f64,
    pub handoff: Option<HandoffSuggestion>,
}

#[derive(Debug, Deserialize)]
struct RawPersonaReply {
    message: Option<serde_json::Value>,
    #[serde(default)]
    intent: Option<String>,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    handoff: Option<RawHandoff>,
}

#[derive(Debug, Deserialize)]
struct RawHandoff {
    to: String,
    #[serde(default)]
    reason: String,
}

/// Parse a persona reply. Never fails: text without a usable JSON message
/// becomes a plain-text reply with low confidence.
pub fn parse_persona_reply(text: &str) -> PersonaReply {
    if let Some(raw) = parse_json_reply::<RawPersonaReply>(text)
        && let Some(serde_json::Value::String(message)) = raw.message
        && !message.trim().is_empty()
    {
        return PersonaReply {
            message,
            intent: raw.intent.filter(|i| !i.is_empty()),
            confidence: raw
                .confidence
                .filter(|c| *c > 0.0)
                .unwrap_or(DEFAULT_REPLY_CONFIDENCE)
                .min(1.0),
            handoff: raw.handoff.and_then(|h| {
                let to = h.to.parse::<PersonaKind>().ok()?;
                Some(HandoffSuggestion {
                    to,
                    reason: h.reason,
                })
            }),
        };
    }

    let cleaned = strip_code_fences(text);
    PersonaReply {
        message: if cleaned.is_empty() {
            EMPTY_REPLY.to_string()
        } else {
            cleaned
        },
        intent: None,
        confidence: PLAIN_TEXT_CONFIDENCE,
        handoff: None,
    }
}
