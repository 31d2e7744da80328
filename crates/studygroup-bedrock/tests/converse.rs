//! Integration tests against the live Converse API.
//!
//! These tests call real AWS APIs and require valid credentials in the
//! environment (e.g. `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`) and
//! model access in the configured region.
//!
//! Run with: `cargo test -p studygroup-bedrock --test converse -- --ignored`

use studygroup_bedrock::{BedrockConfig, BedrockGenerator};
use studygroup_core::collaborators::ContentGenerator;

#[tokio::test]
#[ignore]
async fn standard_model_returns_text() {
    let generator = BedrockGenerator::connect(BedrockConfig::from_env()).await;
    let text = generator
        .generate("Reply with the single word: pong", false)
        .await
        .expect("generation should succeed");
    assert!(text.to_lowercase().contains("pong"), "got: {text}");
}

#[tokio::test]
#[ignore]
async fn reasoning_model_returns_json() {
    let generator = BedrockGenerator::connect(BedrockConfig::from_env()).await;
    let text = generator
        .generate(
            "Return only this JSON object and nothing else: {\"message\": \"hi\"}",
            true,
        )
        .await
        .expect("generation should succeed");
    assert!(text.contains("\"message\""), "got: {text}");
}
