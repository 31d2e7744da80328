use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message,
};

use crate::error::BedrockError;

/// Text and token counts from one Converse call.
#[derive(Debug, Clone)]
pub struct ConverseOutput {
    pub text: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

/// Send a single user turn through the Converse API.
pub async fn invoke_converse(
    client: &Client,
    model_id: &str,
    prompt: &str,
    max_tokens: i32,
) -> Result<ConverseOutput, BedrockError> {
    let response = client
        .converse()
        .model_id(model_id)
        .inference_config(InferenceConfiguration::builder().max_tokens(max_tokens).build())
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(prompt.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let (input_tokens, output_tokens) = response
        .usage()
        .map(|u| (u.input_tokens as u64, u.output_tokens as u64))
        .unwrap_or((0, 0));

    Ok(ConverseOutput {
        text,
        input_tokens,
        output_tokens,
    })
}
