use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_s3 as s3;

use super::Collected;
use crate::sdk_errors::capture;

/// List S3 buckets. ListBuckets returns the whole account in one response,
/// so this is the one global collector with no pagination.
pub async fn list_buckets(config: &SdkConfig) -> Collected {
    Collected::from_result(fetch_buckets(config).await)
}

async fn fetch_buckets(config: &SdkConfig) -> Result<Vec<String>> {
    let client = s3::Client::new(config);
    let response = client
        .list_buckets()
        .send()
        .await
        .map_err(capture)
        .context("ListBuckets request failed")?;

    let mut lines = Vec::new();
    for bucket in response.buckets.unwrap_or_default() {
        if let Some(name) = bucket.name {
            lines.push(name);
        }
    }
    Ok(lines)
}
