//! Health and readiness response bodies

use crate::agent::models::BackendHealth;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Endpoints advertised by the readiness report
pub const MCP_ENDPOINTS: [&str; 4] = ["/mcp", "/health", "/ready", "/sse"];

/// Body of a successful liveness check
#[derive(Debug, Serialize)]
pub struct LivenessReport {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
    pub uptime: &'static str,
    pub version: &'static str,
    pub agent_service_url: String,
}

/// Body of a readiness check, in either outcome
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReadinessReport {
    Ready {
        service: &'static str,
        timestamp: DateTime<Utc>,
        agent_service_status: BackendHealth,
        mcp_endpoints: [&'static str; 4],
    },
    NotReady {
        reason: &'static str,
        agent_status: BackendHealth,
    },
}

impl ReadinessReport {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadinessReport::Ready { .. })
    }
}
