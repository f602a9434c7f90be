use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

// HTTP-facing error. The only errors this service can produce are request
// body validation failures, surfaced through the `ApiJson` extractor.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}
impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.message }))).into_response()
    }
}
