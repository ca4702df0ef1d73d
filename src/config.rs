//! Relay configuration
//!
//! All options are injected through CLI flags or environment variables and
//! collapsed into an owned [`RelayConfig`] that the application state carries.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Default location of the agent service inside the cluster
pub const DEFAULT_AGENT_SERVICE_URL: &str = "http://sre-agent-service:8080";

#[derive(Parser, Debug)]
#[command(name = "sre-mcp-relay")]
#[command(version, about = "MCP gateway in front of the SRE agent service")]
pub struct Args {
    /// Interface to listen on.
    #[arg(long, env = "MCP_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(long, env = "MCP_PORT", default_value_t = 30120)]
    pub port: u16,

    /// Base URL of the agent service tool calls are forwarded to.
    #[arg(long, env = "AGENT_SERVICE_URL", default_value = DEFAULT_AGENT_SERVICE_URL)]
    pub agent_service_url: String,

    /// Seconds between two heartbeats on the event stream.
    #[arg(long, env = "SSE_HEARTBEAT_INTERVAL_SECS", default_value_t = 10)]
    pub heartbeat_interval_secs: u64,

    /// Heartbeats sent before an event stream is closed by the server.
    #[arg(long, env = "SSE_MAX_HEARTBEATS", default_value_t = 100)]
    pub max_heartbeats: u64,

    /// Emit logs as JSON lines. `LOG_JSON` accepts 1/0, yes/no, on/off, true/false.
    #[arg(
        long,
        env = "LOG_JSON",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub log_json: bool,
}

impl Args {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Cadence and bound of a single event stream connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSettings {
    pub interval: Duration,
    pub max_heartbeats: u64,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(10),
            max_heartbeats: 100,
        }
    }
}

/// Runtime configuration shared by every request handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Agent service base URL, never ending with `/`
    pub agent_service_url: String,
    pub stream: StreamSettings,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_AGENT_SERVICE_URL)
    }
}

impl RelayConfig {
    pub fn new(agent_service_url: impl Into<String>) -> Self {
        let url: String = agent_service_url.into();
        Self {
            agent_service_url: url.trim_end_matches('/').to_string(),
            stream: StreamSettings::default(),
        }
    }

    pub fn with_stream(mut self, stream: StreamSettings) -> Self {
        self.stream = stream;
        self
    }
}

impl From<&Args> for RelayConfig {
    fn from(args: &Args) -> Self {
        RelayConfig::new(args.agent_service_url.as_str()).with_stream(StreamSettings {
            interval: Duration::from_secs(args.heartbeat_interval_secs),
            max_heartbeats: args.max_heartbeats,
        })
    }
}
