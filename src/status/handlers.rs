//! Liveness and readiness endpoints
//!
//! Liveness never touches the agent service. Readiness checks it on every
//! call and reports 503 unless it answers as connected.

use super::models::*;
use crate::agent::SharedState;
use crate::mcp::models::{SERVER_NAME, SERVER_VERSION};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;
use tracing::{debug, error, warn};

/// Creates routes for the health and readiness endpoints
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(handle_health))
        .route("/ready", get(handle_ready))
}

/// Endpoint: GET /health
async fn handle_health(State(state): State<SharedState>) -> Response {
    let report = LivenessReport {
        status: "healthy",
        service: SERVER_NAME,
        timestamp: Utc::now(),
        uptime: "running",
        version: SERVER_VERSION,
        agent_service_url: state.config.agent_service_url.clone(),
    };

    match serde_json::to_value(&report) {
        Ok(body) => {
            debug!("Health check: {}", body);
            Json(body).into_response()
        }
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Endpoint: GET /ready
async fn handle_ready(State(state): State<SharedState>) -> Response {
    let report = readiness(&state).await;

    if report.is_ready() {
        Json(report).into_response()
    } else {
        warn!("Readiness check failed: agent service not available");
        (StatusCode::SERVICE_UNAVAILABLE, Json(report)).into_response()
    }
}

/// Checks the agent service and builds the readiness report.
pub async fn readiness(state: &SharedState) -> ReadinessReport {
    let agent_status = state.agent.check_health().await;

    if !agent_status.is_connected() {
        return ReadinessReport::NotReady {
            reason: "Agent service not available",
            agent_status,
        };
    }

    ReadinessReport::Ready {
        service: SERVER_NAME,
        timestamp: Utc::now(),
        agent_service_status: agent_status,
        mcp_endpoints: MCP_ENDPOINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AppState;
    use crate::config::RelayConfig;

    #[tokio::test]
    async fn unreachable_agent_is_not_ready() {
        let state = AppState::new(RelayConfig::new("http://127.0.0.1:1"))
            .unwrap()
            .shared();
        let report = readiness(&state).await;
        assert!(!report.is_ready());

        let body = serde_json::to_value(&report).unwrap();
        assert_eq!(body["status"], "not_ready");
        assert_eq!(body["reason"], "Agent service not available");
        assert_eq!(body["agent_status"]["status"], "disconnected");
    }
}
