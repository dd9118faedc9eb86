use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;

use crate::models::config::StorageConfig;
use crate::repository::{ResumeReader, StorageError, StorageResult};

/// [`ResumeReader`] backed by an S3 bucket.
pub struct S3Repository {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Repository {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Builds a client from the default AWS provider chain, applying the
    /// region and endpoint overrides from `config`.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // Path-style addressing is what S3-compatible endpoints expect.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint_url.is_some())
            .build();

        Self::new(aws_sdk_s3::Client::from_conf(s3_config), &config.bucket)
    }
}

#[async_trait]
impl ResumeReader for S3Repository {
    async fn read_object(&self, key: &str) -> StorageResult<Vec<u8>> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        Ok(body.into_bytes().to_vec())
    }
}
