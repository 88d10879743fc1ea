//! Data Transfer Objects
//!
//! Response types for the gateway's own endpoints. Record payloads use
//! the shared model in [`crate::record`].

use serde::Serialize;

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// Record backend status: "ok" or "unreachable"
    pub backend: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Gateway version
    pub version: String,
}
