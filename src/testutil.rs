//! Shared test helpers for item-listing router tests.

use std::sync::Arc;

use crate::config::{Config, ServerConfig, StorageConfig};
use crate::image_store::LocalImageStore;
use crate::storage::Database;
use crate::AppState;

/// Create a test AppState with a temporary database and local image store.
pub async fn test_state(temp_dir: &tempfile::TempDir) -> Arc<AppState> {
    let database_path = temp_dir.path().join("db").join("test.sqlite3");
    let images_dir = temp_dir.path().join("images");

    let config = Config {
        server: ServerConfig {
            bind_address: "127.0.0.1:0".to_string(),
            ..Default::default()
        },
        storage: StorageConfig {
            database_path: database_path.to_string_lossy().to_string(),
            images_dir: images_dir.to_string_lossy().to_string(),
            default_image: "default.jpg".to_string(),
        },
        max_upload_size: 10 * 1024 * 1024, // 10MB for tests
    };

    let db = Database::open(&database_path)
        .await
        .expect("Failed to open test database");
    let images = LocalImageStore::new(&images_dir).expect("Failed to create test image store");

    Arc::new(AppState {
        config,
        db,
        images: Arc::new(images),
    })
}
