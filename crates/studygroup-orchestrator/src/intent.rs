//! Intent classifier: free-text student message → intent guess.
//!
//! Ordered pattern rules decide the common cases without any external call;
//! only messages no rule matches are sent to the content generator.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use studygroup_core::collaborators::ContentGenerator;
use studygroup_core::models::intent::{Intent, IntentGuess};

use crate::prompts;
use crate::reply;

struct Rule {
    pattern: Regex,
    intent: Intent,
    confidence: f64,
}

/// Evaluated in order; the first match wins.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (r"explain|help|understand|what is|how does|why", Intent::Explain, 0.9),
        (r"quiz|test|question|practice", Intent::Quiz, 0.9),
        (r"challenge|hard|difficult|more", Intent::Challenge, 0.8),
        (r"tired|break|rest|overwhelmed|frustrated", Intent::Break, 0.9),
        (r"answer is|my answer|i think", Intent::Answer, 0.9),
    ]
    .into_iter()
    .filter_map(|(pattern, intent, confidence)| {
        Regex::new(&format!("(?i){pattern}"))
            .ok()
            .map(|pattern| Rule {
                pattern,
                intent,
                confidence,
            })
    })
    .collect()
});

/// Classify by pattern alone. Deterministic; `None` when no rule matches.
pub fn match_rules(message: &str) -> Option<IntentGuess> {
    RULES
        .iter()
        .find(|rule| rule.pattern.is_match(message))
        .map(|rule| IntentGuess::new(rule.intent, rule.confidence))
}

/// Classify a student message.
///
/// Never fails: a generator error or an unparseable reply degrades to
/// [`IntentGuess::fallback`].
pub async fn classify(generator: &dyn ContentGenerator, message: &str) -> IntentGuess {
    if let Some(guess) = match_rules(message) {
        debug!(intent = %guess.intent, "intent matched by pattern");
        return guess;
    }

    let prompt = prompts::intent_classification(message);
    match generator.generate(&prompt, false).await {
        Ok(text) => reply::parse_intent(&text).unwrap_or_else(|| {
            warn!("intent classification reply was not valid JSON, using fallback");
            IntentGuess::fallback()
        }),
        Err(e) => {
            warn!(error = %e, "intent classification failed, using fallback");
            IntentGuess::fallback()
        }
    }
}
