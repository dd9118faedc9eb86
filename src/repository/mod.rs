use async_trait::async_trait;
use thiserror::Error;

pub mod s3;

pub use s3::S3Repository;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read object {key}: {message}")]
    Read { key: String, message: String },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Read access to the object store holding the resume.
#[async_trait]
pub trait ResumeReader: Send + Sync {
    /// Returns the full contents of the object stored under `key`.
    async fn read_object(&self, key: &str) -> StorageResult<Vec<u8>>;
}
