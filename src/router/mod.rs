//! Routing module for the relay

use crate::agent::state::SharedState;
use crate::error::INTERNAL_ERROR;
use crate::mcp::helpers::rpc_error;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, info, warn};

/// Signature of the handler turning a panic payload into a response
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let start = Instant::now();
        info!(">>> {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        let elapsed = start.elapsed().as_millis();
        if res.status().is_success() {
            info!("<<< {} ({}ms)", res.status().as_u16(), elapsed);
        } else {
            warn!("<<< {} ({}ms)", res.status().as_u16(), elapsed);
        }
        res
    });

    // Middleware: CORS (clients connect from arbitrary origins)
    let cors_layer = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    // Routes
    Router::new()
        .merge(crate::mcp::routes())
        .merge(crate::status::routes())
        .merge(crate::stream::routes())
        .layer(catch_panic_layer())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Middleware: answers a panicking handler with a JSON-RPC internal error
pub fn catch_panic_layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(internal_error_response as PanicHandler)
}

fn internal_error_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Internal error".to_string()
    };

    error!("Error handling MCP request: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(rpc_error(None, INTERNAL_ERROR, detail)),
    )
        .into_response()
}
