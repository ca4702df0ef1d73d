//! SRE Agent Service Module
//!
//! This module contains everything needed to reach the agent service:
//! - Tool models and the fixed tool registry
//! - The HTTP client that forwards tool calls and checks health
//! - Application state shared by the handlers

pub mod client;
pub mod models;
pub mod registry;
pub mod state;

// Re-export commonly used types for convenience
pub use client::AgentClient;
pub use state::{AppState, SharedState};
