use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

const JSON: &str = "application/json";

/// Whether a write may replace an object already stored at its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Overwrite,
    /// Sent with `If-None-Match: *`; fails with
    /// [`StorageError::PreconditionFailed`] when the key is taken.
    CreateOnly,
}

/// Read the full body stored at `key`.
pub async fn read_object(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, StorageError> {
    let output = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| match e.into_service_error() {
            err if err.is_no_such_key() => StorageError::NotFound {
                key: key.to_string(),
            },
            err => StorageError::GetObject(err.to_string()),
        })?;

    let bytes = output
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?;
    Ok(bytes.into_bytes().to_vec())
}

/// Store a JSON document at `key`.
pub async fn write_json(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    mode: WriteMode,
) -> Result<(), StorageError> {
    let request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(JSON)
        .body(ByteStream::from(body));
    let request = match mode {
        WriteMode::Overwrite => request,
        WriteMode::CreateOnly => request.if_none_match("*"),
    };

    request.send().await.map_err(|e| {
        // 412 when the key exists, 409 when a concurrent conditional write won.
        let status = e.raw_response().map(|r| r.status().as_u16());
        match (mode, status) {
            (WriteMode::CreateOnly, Some(409 | 412)) => StorageError::PreconditionFailed {
                key: key.to_string(),
            },
            _ => StorageError::PutObject(e.into_service_error().to_string()),
        }
    })?;
    Ok(())
}

/// Every key under `prefix`, following continuation pages.
pub async fn list_keys(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut pages = client
        .list_objects_v2()
        .bucket(bucket)
        .prefix(prefix)
        .into_paginator()
        .send();

    let mut keys = Vec::new();
    while let Some(page) = pages.next().await {
        let page =
            page.map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;
        for object in page.contents() {
            keys.extend(object.key().map(str::to_string));
        }
    }
    Ok(keys)
}
