//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the JSON-RPC dispatcher of the relay. It exports
//! `dispatch` publicly so the method routing can be exercised without HTTP.

use super::{helpers::*, models::*};
use crate::agent::{registry, AppState, SharedState};
use crate::error::{McpError, McpResult, PARSE_ERROR};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/mcp", post(handle_mcp).get(handle_mcp_info)) // Standard endpoint
        .route("/mcp/", post(handle_mcp).get(handle_mcp_info)) // Trailing slash safety
}

/// Endpoint: GET /mcp
/// Describes the server and where its endpoints live.
async fn handle_mcp_info(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "description": "SRE Agent MCP Server - Thin protocol layer",
        "protocol": "mcp",
        "capabilities": {
            "tools": true,
            "resources": false,
            "prompts": false
        },
        "endpoints": {
            "mcp": "/mcp",
            "health": "/health",
            "ready": "/ready",
            "sse": "/sse"
        },
        "agent_service": state.config.agent_service_url
    }))
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(State(state): State<SharedState>, body: Bytes) -> Response {
    // Parse JSON-RPC envelope; the id cannot be trusted if this fails
    let envelope = match RpcEnvelope::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("JSON-RPC parse error: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(rpc_error(None, PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let (id, method, params) = match envelope.classify() {
        Inbound::Notification { method } => {
            debug!(%method, "Notification acknowledged");
            return Json(json!({})).into_response();
        }
        Inbound::Request { id, method, params } => (id, method, params),
    };

    info!(method = method.as_str(), id = %id, "MCP call");

    match dispatch(&state, method, params).await {
        Ok(result) => Json(rpc_success(id, result)).into_response(),
        Err(err) => {
            let status = if err.is_internal() {
                error!("Error handling MCP request: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                warn!("Rejected MCP request: {}", err);
                StatusCode::OK
            };
            (
                status,
                Json(rpc_error(Some(id), err.error_code(), err.to_string())),
            )
                .into_response()
        }
    }
}

/// Routes one request to its method handler.
pub async fn dispatch(
    state: &AppState,
    method: RpcMethod,
    params: Option<Value>,
) -> McpResult<Value> {
    match method {
        RpcMethod::Initialize => Ok(handle_initialize()),
        RpcMethod::ToolsList => handle_tools_list(),
        RpcMethod::ToolsCall => handle_tool_call(state, params.as_ref()).await,
        RpcMethod::Unknown(name) => Err(McpError::MethodNotFound(name)),
    }
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list() -> McpResult<Value> {
    let tools = serde_json::to_value(registry::descriptors())?;
    Ok(json!({ "tools": tools }))
}

/// Handles `tools/call` request by forwarding it to the agent service.
async fn handle_tool_call(state: &AppState, params: Option<&Value>) -> McpResult<Value> {
    let call = ToolInvocation::from_params(params)?;
    let text = state.agent.call_tool(&call.name, &call.arguments).await;
    Ok(text_content(text))
}
