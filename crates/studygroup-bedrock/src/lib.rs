//! studygroup-bedrock
//!
//! A `ContentGenerator` backed by the Bedrock Converse API.

pub mod client;
pub mod config;
pub mod converse;
pub mod error;
pub mod generator;

pub use config::BedrockConfig;
pub use generator::BedrockGenerator;
