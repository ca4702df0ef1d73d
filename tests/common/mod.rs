//! Shared test helpers: an in-process relay and a mock agent service
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sre_mcp_relay::agent::AppState;
use sre_mcp_relay::config::{RelayConfig, StreamSettings};
use sre_mcp_relay::router::create_app_router;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::util::ServiceExt; // for `oneshot`

/// Nothing listens on port 1 on the loopback interface.
pub const CLOSED_AGENT_URL: &str = "http://127.0.0.1:1";

/// Event stream bound used by test apps
pub const TEST_MAX_HEARTBEATS: u64 = 3;

/// Helper function to create a test app instance forwarding to `agent_url`
pub fn create_test_app(agent_url: &str) -> Router {
    let config = RelayConfig::new(agent_url).with_stream(StreamSettings {
        interval: Duration::from_millis(1),
        max_heartbeats: TEST_MAX_HEARTBEATS,
    });
    let state = AppState::new(config).unwrap().shared();
    create_app_router(state)
}

/// Serves `router` on a random local port and returns its base URL
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A well-behaved agent service.
///
/// - `/chat` answers "hello" to "hi" and echoes anything else
/// - `/analyze-logs` answers without the `analysis` field
/// - `/incident-response` fails with HTTP 500
/// - `/monitoring-advice` answers with the exact body it received
pub async fn spawn_agent() -> String {
    let router = Router::new()
        .route(
            "/chat",
            post(|Json(body): Json<Value>| async move {
                let message = body["message"].as_str().unwrap_or_default().to_string();
                let response = if message == "hi" {
                    "hello".to_string()
                } else {
                    format!("echo: {}", message)
                };
                Json(json!({ "response": response }))
            }),
        )
        .route(
            "/analyze-logs",
            post(|| async { Json(json!({ "summary": "looks fine" })) }),
        )
        .route(
            "/incident-response",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "agent exploded") }),
        )
        .route(
            "/monitoring-advice",
            post(|Json(body): Json<Value>| async move {
                Json(json!({ "advice": body.to_string() }))
            }),
        )
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "healthy", "model": "test-model" })) }),
        );

    spawn_backend(router).await
}

/// An agent service whose health endpoint reports a failure
pub async fn spawn_unhealthy_agent() -> String {
    let router = Router::new().route(
        "/health",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "warming up") }),
    );
    spawn_backend(router).await
}

/// Sends a request and returns status, content type and raw body
pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(Body::from).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, body_bytes.to_vec())
}

/// Helper function to POST a raw body to /mcp and parse the JSON answer
pub async fn post_mcp(app: &Router, body: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = send_raw(app, "POST", "/mcp", Some(body.to_string())).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// Helper function to send a JSON-RPC request and get the response
pub async fn send_jsonrpc_request(
    app: &Router,
    method: &str,
    params: Option<Value>,
    id: Value,
) -> (StatusCode, Value) {
    let mut request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "id": id
    });
    if let Some(params) = params {
        request_body["params"] = params;
    }

    post_mcp(app, &request_body.to_string()).await
}

/// Helper function to GET a JSON endpoint
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = send_raw(app, "GET", uri, None).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
