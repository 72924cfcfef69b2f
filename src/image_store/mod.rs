mod local;

pub use local::LocalImageStore;

use async_trait::async_trait;
use bytes::Bytes;
use ring::digest::{digest, SHA256};
use thiserror::Error;

/// Every stored and served image name ends with this suffix.
pub const IMAGE_EXTENSION: &str = ".jpg";

#[derive(Debug, Error)]
pub enum ImageStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid image name: {0}")]
    InvalidName(String),
    #[error("Image not found: {0}")]
    NotFound(String),
}

/// Abstraction over image storage backends.
/// Names are `<sha256 hex>.jpg`; the same bytes always land under the same name.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), ImageStoreError>;
    async fn get(&self, name: &str) -> Result<Bytes, ImageStoreError>;
    async fn exists(&self, name: &str) -> Result<bool, ImageStoreError>;
}

/// Derive the content-addressed file name for a blob of image bytes.
pub fn content_name(data: &[u8]) -> String {
    let hash = digest(&SHA256, data);
    format!("{}{IMAGE_EXTENSION}", hex::encode(hash.as_ref()))
}

/// Reject names that lack the `.jpg` suffix or could escape the store directory.
pub fn validate_name(name: &str) -> Result<(), ImageStoreError> {
    if !name.ends_with(IMAGE_EXTENSION) {
        return Err(ImageStoreError::InvalidName(format!(
            "image name does not end with {IMAGE_EXTENSION}"
        )));
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err(ImageStoreError::InvalidName(format!(
            "image name '{name}' must not contain path components"
        )));
    }
    Ok(())
}

/// Store an uploaded image under its content hash and return the stored name.
///
/// Only the declared file name is checked; the bytes are not sniffed. An
/// existing file with the same name is overwritten, which is a no-op in
/// practice since it holds identical bytes.
pub async fn ingest(
    store: &dyn ImageStore,
    declared_name: &str,
    data: Bytes,
) -> Result<String, ImageStoreError> {
    if !declared_name.ends_with(IMAGE_EXTENSION) {
        return Err(ImageStoreError::InvalidName(format!(
            "image file name does not end with {IMAGE_EXTENSION}"
        )));
    }

    let name = content_name(&data);
    store.put(&name, data).await?;
    Ok(name)
}

/// Fetch an image by name, substituting `default_name` when it is absent.
pub async fn fetch_or_default(
    store: &dyn ImageStore,
    name: &str,
    default_name: &str,
) -> Result<Bytes, ImageStoreError> {
    validate_name(name)?;

    if store.exists(name).await? {
        return store.get(name).await;
    }

    tracing::debug!(image = %name, fallback = %default_name, "Image not found, serving default");
    store.get(default_name).await
}
