use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};

use crate::api::dto::{RequestInfo, RootResponse, ServiceInfo, ENDPOINTS};
use crate::api::response;
use crate::api::AppState;
use crate::infrastructure::system;

pub fn build_root(state: &AppState, request: RequestInfo) -> RootResponse {
    RootResponse {
        service: ServiceInfo::current(),
        system: system::probe(),
        runtime: state.uptime.elapsed(),
        request,
        endpoints: ENDPOINTS,
    }
}

/// GET / - Service, host, uptime and request information
pub async fn root_handler(State(state): State<Arc<AppState>>, request: RequestInfo) -> Response {
    response::json(StatusCode::OK, &build_root(&state, request))
}
