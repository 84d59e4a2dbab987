use axum::{extract::Request, middleware::Next, response::Response};

/// Log method and path of every inbound request before dispatch
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!("Request: {} {}", request.method(), request.uri().path());

    next.run(request).await
}
