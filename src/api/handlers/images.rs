use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use super::image_error;
use crate::api::response::{ApiError, AppPath};
use crate::image_store;
use crate::AppState;

/// Serve image bytes by stored name.
/// Route: GET /image/:name
///
/// A missing image is not an error; the configured default image is served instead.
pub async fn get_image(
    State(state): State<Arc<AppState>>,
    AppPath(name): AppPath<String>,
) -> Result<Response, ApiError> {
    let data = image_store::fetch_or_default(
        state.images.as_ref(),
        &name,
        &state.config.storage.default_image,
    )
    .await
    .map_err(image_error)?;

    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    let mime = mime_guess::from_path(&name).first_or_octet_stream();
    headers.insert(
        header::CONTENT_TYPE,
        mime.as_ref()
            .parse()
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );

    Ok(response)
}
