use std::any::Any;

use axum::response::Response;

use crate::api::response;

/// Convert a handler panic into the fixed JSON 500 response
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    tracing::error!("panic: {}", detail);

    response::internal_error()
}
