use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

use super::{database_error, image_error};
use crate::api::response::{ApiError, AppPath, AppQuery, ItemsResponse, MessageResponse};
use crate::image_store;
use crate::storage::models::{Item, NewItem};
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

/// An uploaded file part: declared file name plus its bytes
struct Upload {
    file_name: String,
    data: Bytes,
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn create_item(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|e| ApiError::bad_request(format!("Invalid multipart data: {e}")))?;
    let limit = state.config.max_upload_size;

    let mut name: Option<String> = None;
    let mut category: Option<String> = None;
    let mut image: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error("Invalid multipart data", limit))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "name" => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(multipart_error("Invalid name", limit))?,
                );
            }
            "category" => {
                category = Some(
                    field
                        .text()
                        .await
                        .map_err(multipart_error("Invalid category", limit))?,
                );
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(multipart_error("Failed to read image", limit))?;

                image = Some(Upload { file_name, data });
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let name = name.unwrap_or_default();
    if name.is_empty() {
        return Err(ApiError::bad_request("name is required"));
    }
    let category = category.unwrap_or_default();
    if category.is_empty() {
        return Err(ApiError::bad_request("category is required"));
    }
    let image = image.ok_or_else(|| ApiError::bad_request("image is required"))?;

    // Phase 1: store the image under its content hash
    let image_name = image_store::ingest(state.images.as_ref(), &image.file_name, image.data)
        .await
        .map_err(image_error)?;

    // Phase 2: resolve the category and insert the row
    let item = state
        .db
        .create_item(&NewItem {
            name: name.clone(),
            category,
            image_name,
        })
        .await
        .map_err(database_error)?;

    tracing::debug!(item_id = item.id, image = %item.image_name, "Created item");

    Ok(MessageResponse::new(format!("item received: {name}")))
}

pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let items = state.db.list_items().await.map_err(database_error)?;
    Ok(Json(ItemsResponse { items }))
}

pub async fn get_item(
    State(state): State<Arc<AppState>>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Item>, ApiError> {
    if id < 1 {
        return Err(ApiError::bad_request("id must be 1 or greater"));
    }

    let item = state
        .db
        .get_item(id)
        .await
        .map_err(database_error)?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    Ok(Json(item))
}

pub async fn search_items(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<SearchParams>,
) -> Result<Json<ItemsResponse>, ApiError> {
    if params.keyword.is_empty() {
        return Err(ApiError::bad_request("keyword is required"));
    }

    let items = state
        .db
        .search_items(&params.keyword)
        .await
        .map_err(database_error)?;
    Ok(Json(ItemsResponse { items }))
}

// ============================================================================
// Helpers
// ============================================================================

/// Body-limit overruns surface as multipart read errors; keep them as 413.
fn multipart_error(context: &'static str, limit: u64) -> impl Fn(MultipartError) -> ApiError {
    move |e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large(format!("Upload exceeds maximum size of {limit} bytes"))
        } else {
            ApiError::bad_request(format!("{context}: {e}"))
        }
    }
}
