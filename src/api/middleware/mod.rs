pub mod recovery;
pub mod request_logging;

use axum::{middleware, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub use recovery::panic_response;
pub use request_logging::log_request;

/// Wrap a router in request logging, HTTP tracing and panic recovery
///
/// Panic recovery is the outermost layer so nothing below it can take the
/// process down.
pub fn apply(router: Router) -> Router {
    router
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}
