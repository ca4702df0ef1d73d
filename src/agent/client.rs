//! HTTP client for communicating with the SRE agent service.
//!
//! Tool calls never fail from the caller's point of view: every failure mode
//! ends up as a descriptive sentence in the returned text.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};
use tracing::{debug, error};

use super::models::{BackendHealth, HttpVerb, ToolSpec};
use super::registry;

/// Timeout for the agent service health check
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

const HEALTH_PATH: &str = "/health";

/// Client for the agent service.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct AgentClient {
    client: Client,
    base_url: String,
}

impl AgentClient {
    /// Create a new AgentClient.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the agent service (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL of the agent service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // =========================================================================
    // Tool Forwarding
    // =========================================================================

    /// Runs a tool on the agent service and returns its text answer.
    ///
    /// Unknown tools, transport failures and non-200 answers all produce a
    /// sentence describing the problem instead of an error.
    pub async fn call_tool(&self, name: &str, arguments: &Map<String, Value>) -> String {
        let Some(tool) = registry::find_tool(name) else {
            return format!("Unknown tool: {}", name);
        };

        match self.forward(tool, arguments).await {
            Ok(text) => text,
            Err(e) => {
                error!(tool = tool.name, "Error forwarding to agent service: {}", e);
                format!("Error forwarding to agent service: {}", e)
            }
        }
    }

    async fn forward(
        &self,
        tool: &ToolSpec,
        arguments: &Map<String, Value>,
    ) -> Result<String, reqwest::Error> {
        let url = self.url(tool.endpoint);
        debug!(tool = tool.name, %url, "Forwarding tool call");

        let request = match tool.method {
            HttpVerb::Get => self.client.get(&url),
            HttpVerb::Post => self.client.post(&url).json(&tool.shape_request(arguments)),
        };
        let response = request.timeout(tool.timeout).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Ok(format!("Error: HTTP {} - {}", status.as_u16(), body));
        }

        let body: Value = response.json().await?;
        Ok(tool.reply.render(&body))
    }

    // =========================================================================
    // Health Check
    // =========================================================================

    /// Checks the agent service `/health` endpoint.
    pub async fn check_health(&self) -> BackendHealth {
        let response = match self
            .client
            .get(self.url(HEALTH_PATH))
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return BackendHealth::disconnected(&self.base_url, e.to_string()),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return BackendHealth::error(&self.base_url, format!("HTTP {}", status.as_u16()));
        }

        match response.json::<Value>().await {
            Ok(health) => BackendHealth::connected(&self.base_url, health),
            Err(e) => BackendHealth::disconnected(&self.base_url, e.to_string()),
        }
    }
}
