use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::StorageError;
use crate::objects::{self, WriteMode};

/// Load a JSON document from S3, or `None` if the key does not exist.
pub async fn load_state<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match objects::read_object(client, bucket, key).await {
        Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Save a JSON document to S3, replacing any previous version.
pub async fn save_state<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::write_json(client, bucket, key, body, WriteMode::Overwrite).await
}

/// Save a JSON document only if nothing exists at `key` yet.
pub async fn create_state<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::write_json(client, bucket, key, body, WriteMode::CreateOnly).await
}
