use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::dto::ErrorResponse;

// Serialized form of ErrorResponse::INTERNAL, used when encoding itself fails
const INTERNAL_ERROR_BODY: &str =
    r#"{"error":"Internal Server Error","message":"An unexpected error occurred"}"#;

/// Serialize `payload` as a JSON response with the given status
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => with_json_content_type(status, body),
        Err(e) => {
            tracing::error!("Failed to encode response body: {}", e);
            internal_error()
        }
    }
}

pub fn not_found() -> Response {
    json(StatusCode::NOT_FOUND, &ErrorResponse::NOT_FOUND)
}

pub fn internal_error() -> Response {
    with_json_content_type(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
}

fn with_json_content_type(status: StatusCode, body: impl IntoResponse) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
