pub mod dto;
pub mod middleware;
pub mod request_info;
pub mod response;
pub mod routes;

use std::sync::Arc;

use axum::Router;

pub use crate::infrastructure::app_state::AppState;

/// Build the complete application: routes, state and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    middleware::apply(routes::create_routes().with_state(state))
}
