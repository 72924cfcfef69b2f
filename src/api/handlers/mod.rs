mod health;
mod images;
mod items;

use crate::api::response::ApiError;
use crate::image_store::ImageStoreError;
use crate::storage::DatabaseError;

pub use health::hello;
pub use images::get_image;
pub use items::{create_item, get_item, list_items, search_items};

/// Map a DatabaseError to an ApiError
fn database_error(e: DatabaseError) -> ApiError {
    match e {
        DatabaseError::Conflict(_) => {
            ApiError::conflict("Conflicting concurrent write, retry shortly")
        }
        _ => ApiError::internal(e.to_string()),
    }
}

/// Map an ImageStoreError to an ApiError
fn image_error(e: ImageStoreError) -> ApiError {
    match e {
        ImageStoreError::InvalidName(msg) => ApiError::bad_request(msg),
        ImageStoreError::NotFound(_) => ApiError::not_found("Image not found"),
        ImageStoreError::Io(_) => ApiError::internal(format!("Image storage failed: {e}")),
    }
}
