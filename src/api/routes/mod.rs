pub mod health;
pub mod root;

use std::sync::Arc;

use axum::{
    handler::Handler,
    response::Response,
    routing::{get, MethodRouter},
    Router,
};

use crate::api::response;
use crate::api::AppState;

/// Create the service routes
///
/// Unregistered methods on a known path get the same 404 as unknown paths.
/// `HEAD` is claimed explicitly since axum would otherwise serve it from the
/// `GET` handler.
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get_only(root::root_handler))
        .route("/health", get_only(health::health_handler))
        .fallback(not_found)
}

fn get_only<H, T>(handler: H) -> MethodRouter<Arc<AppState>>
where
    H: Handler<T, Arc<AppState>>,
    T: 'static,
{
    get(handler).head(not_found).fallback(not_found)
}

/// Fallback for anything not routed above
pub async fn not_found() -> Response {
    response::not_found()
}
