use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};
use chrono::Utc;

use crate::api::dto::HealthResponse;
use crate::api::response;
use crate::api::AppState;

/// UTC, microsecond precision, explicit offset
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%:z";

pub fn build_health(state: &AppState) -> HealthResponse {
    HealthResponse {
        status: "healthy",
        timestamp: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        uptime_seconds: state.uptime.seconds(),
    }
}

/// GET /health - Liveness check
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Response {
    response::json(StatusCode::OK, &build_health(&state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_health_timestamp_format() {
        let health = build_health(&AppState::new());

        assert_eq!(health.status, "healthy");
        assert!(health.timestamp.ends_with("+00:00"));

        let parsed = DateTime::parse_from_rfc3339(&health.timestamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);

        // 2024-01-01T00:00:00.000000+00:00
        let fraction = health.timestamp.split('.').nth(1).unwrap();
        assert_eq!(fraction.len(), "000000+00:00".len());
    }
}
