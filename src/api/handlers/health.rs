use axum::Json;

use crate::api::response::MessageResponse;

pub async fn hello() -> Json<MessageResponse> {
    MessageResponse::new("Hello, world!")
}
