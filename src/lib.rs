//! item-listing - A small item listing backend
//!
//! This crate provides item submission, lookup and keyword search with:
//! - Content-addressed image storage (SHA-256 of the bytes names the file)
//! - Get-or-create category resolution backed by a unique index
//! - SQLite persistence via a pooled sqlx connection
//! - REST API with multipart upload support

pub mod api;
pub mod config;
pub mod image_store;
pub mod storage;
#[cfg(test)]
pub mod testutil;

use std::sync::Arc;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub images: Arc<dyn image_store::ImageStore>,
}
