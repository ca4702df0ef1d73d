//! MCP Protocol Models and Constants
//!
//! This module contains the JSON-RPC envelope, its classification into
//! requests and notifications, and the closed set of supported methods.

use crate::error::{McpError, McpResult};
use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

// =============================================================================
// MCP Constants
// =============================================================================

/// Server identifier
pub const SERVER_NAME: &str = "sre-agent-mcp-server";
/// Server version reported in the handshake
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 envelope, as received.
///
/// The `jsonrpc` member is not checked. `method` only has to be present;
/// a non-string value is dispatched as an unknown method.
#[derive(Debug, Deserialize)]
pub struct RpcEnvelope {
    /// Method to invoke
    pub method: Value,

    /// Parameters for the method
    #[serde(default)]
    pub params: Option<Value>,

    /// Request identifier. `Some(Value::Null)` when the key is present with
    /// a null value, `None` only when the key is absent.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// An envelope sorted by whether it expects a correlated response
#[derive(Debug, PartialEq)]
pub enum Inbound {
    Notification {
        method: String,
    },
    Request {
        id: Value,
        method: RpcMethod,
        params: Option<Value>,
    },
}

impl RpcEnvelope {
    /// Decodes a request body. Only a single JSON object is an envelope;
    /// arrays (batches) and scalars are rejected.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            envelope @ Value::Object(_) => serde_json::from_value(envelope),
            _ => Err(de::Error::custom("JSON-RPC envelope must be an object")),
        }
    }

    pub fn classify(self) -> Inbound {
        let method = match self.method {
            Value::String(name) => name,
            other => other.to_string(),
        };

        match self.id {
            None => Inbound::Notification { method },
            Some(id) => Inbound::Request {
                id,
                method: RpcMethod::from(method),
                params: self.params,
            },
        }
    }
}

/// The methods this server answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcMethod {
    Initialize,
    ToolsList,
    ToolsCall,
    Unknown(String),
}

impl From<String> for RpcMethod {
    fn from(method: String) -> Self {
        match method.as_str() {
            "initialize" => RpcMethod::Initialize,
            "tools/list" => RpcMethod::ToolsList,
            "tools/call" => RpcMethod::ToolsCall,
            _ => RpcMethod::Unknown(method),
        }
    }
}

impl RpcMethod {
    pub fn as_str(&self) -> &str {
        match self {
            RpcMethod::Initialize => "initialize",
            RpcMethod::ToolsList => "tools/list",
            RpcMethod::ToolsCall => "tools/call",
            RpcMethod::Unknown(name) => name,
        }
    }
}

/// A single `tools/call` request, extracted from its params
#[derive(Debug, Clone, PartialEq)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolInvocation {
    /// Extracts `params.name` and `params.arguments`.
    ///
    /// Absent or null arguments are treated as an empty map.
    pub fn from_params(params: Option<&Value>) -> McpResult<Self> {
        let name = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| McpError::InvalidParams("Tool name is required".into()))?;

        let arguments = match params.and_then(|p| p.get("arguments")) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(arguments)) => arguments.clone(),
            Some(_) => {
                return Err(McpError::InvalidParams(
                    "Tool arguments must be an object".into(),
                ))
            }
        };

        Ok(Self {
            name: name.to_string(),
            arguments,
        })
    }
}
