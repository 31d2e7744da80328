use aws_sdk_bedrockruntime::Client;

/// Load the default AWS config chain pinned to `region`.
pub async fn load_sdk_config(region: &str) -> aws_config::SdkConfig {
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await
}

/// Build a Bedrock runtime client for `region`.
pub async fn build_client(region: &str) -> Client {
    let config = load_sdk_config(region).await;
    Client::new(&config)
}
