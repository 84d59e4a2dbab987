//! Response payloads

use serde::Serialize;

use crate::infrastructure::system::SystemInfo;
use crate::infrastructure::uptime::UptimeInfo;

pub use crate::api::request_info::RequestInfo;

pub const SERVICE_NAME: &str = "devops-info-service";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_DESCRIPTION: &str = "DevOps course info service";
pub const SERVICE_FRAMEWORK: &str = "axum";

/// Advertised endpoints, in display order
pub const ENDPOINTS: &[EndpointInfo] = &[
    EndpointInfo {
        path: "/",
        method: "GET",
        description: "Service information.",
    },
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check endpoint.",
    },
];

// ============================================================================
// Response DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub framework: &'static str,
}

impl ServiceInfo {
    pub const fn current() -> Self {
        Self {
            name: SERVICE_NAME,
            version: SERVICE_VERSION,
            description: SERVICE_DESCRIPTION,
            framework: SERVICE_FRAMEWORK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
}

/// GET / payload
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub service: ServiceInfo,
    pub system: SystemInfo,
    pub runtime: UptimeInfo,
    pub request: RequestInfo,
    pub endpoints: &'static [EndpointInfo],
}

/// GET /health payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime_seconds: u64,
}

/// Body for 404 and 500 responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: &'static str,
}

impl ErrorResponse {
    pub const NOT_FOUND: Self = Self {
        error: "Not Found",
        message: "Endpoint does not exist",
    };

    pub const INTERNAL: Self = Self {
        error: "Internal Server Error",
        message: "An unexpected error occurred",
    };
}
