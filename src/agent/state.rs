//! Relay State Management
//!
//! The context object handed to every request handler. It is built once at
//! startup and only read afterwards.

use super::client::AgentClient;
use crate::config::RelayConfig;
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: configuration and the pooled agent client
pub struct AppState {
    pub config: RelayConfig,

    /// Outbound transport to the agent service, pooled across requests
    pub agent: AgentClient,
}

impl AppState {
    /// Creates the state and the HTTP client for the configured agent URL
    pub fn new(config: RelayConfig) -> Result<Self, reqwest::Error> {
        let agent = AgentClient::new(config.agent_service_url.as_str())?;
        Ok(Self { config, agent })
    }

    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
