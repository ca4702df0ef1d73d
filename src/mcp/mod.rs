//! Model Context Protocol (MCP) Module
//!
//! This module contains the MCP protocol implementation, including:
//! - Protocol models (RpcEnvelope, RpcMethod, ToolInvocation, constants)
//! - RPC helpers (success/error responses, text content)
//! - MCP handlers (initialize, tools/list, tools/call)

pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used types and functions
pub use handlers::routes;
