use aws_sdk_bedrockruntime::Client;
use tracing::{debug, info};

use studygroup_core::collaborators::{BoxFuture, ContentGenerator};
use studygroup_core::error::GenerationError;

use crate::client;
use crate::config::BedrockConfig;
use crate::converse;

/// Generates text with Bedrock, routing extended-reasoning requests to the
/// reasoning model.
pub struct BedrockGenerator {
    client: Client,
    config: BedrockConfig,
}

impl BedrockGenerator {
    pub fn new(client: Client, config: BedrockConfig) -> Self {
        Self { client, config }
    }

    /// Build a client for the configured region.
    pub async fn connect(config: BedrockConfig) -> Self {
        let client = client::build_client(&config.region).await;
        Self::new(client, config)
    }

    pub fn config(&self) -> &BedrockConfig {
        &self.config
    }
}

impl ContentGenerator for BedrockGenerator {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        extended_reasoning: bool,
    ) -> BoxFuture<'a, Result<String, GenerationError>> {
        Box::pin(async move {
            let model_id = self.config.model_for(extended_reasoning);
            debug!(model_id, extended_reasoning, "invoking converse");

            let output =
                converse::invoke_converse(&self.client, model_id, prompt, self.config.max_tokens)
                    .await?;

            info!(
                model_id,
                input_tokens = output.input_tokens,
                output_tokens = output.output_tokens,
                "generation complete"
            );

            if output.text.trim().is_empty() {
                return Err(GenerationError::EmptyResponse);
            }
            Ok(output.text)
        })
    }
}
