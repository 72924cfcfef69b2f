use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

use super::{ImageStore, ImageStoreError};

/// Image store backed by a single local directory.
pub struct LocalImageStore {
    base_path: PathBuf,
}

impl LocalImageStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn image_path(&self, name: &str) -> Result<PathBuf, ImageStoreError> {
        super::validate_name(name)?;
        Ok(self.base_path.join(name))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<(), ImageStoreError> {
        let path = self.image_path(name)?;
        tokio::fs::write(&path, &data).await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Bytes, ImageStoreError> {
        let path = self.image_path(name)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Bytes::from(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, name: &str) -> Result<bool, ImageStoreError> {
        let path = self.image_path(name)?;
        Ok(tokio::fs::try_exists(&path).await?)
    }
}
