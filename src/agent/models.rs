//! Agent Service Models
//!
//! Data structures describing the tools the agent service exposes and the
//! reachability reports produced when probing it.

use serde::Serialize;
use serde_json::{json, Map, Value};
use std::time::Duration;

// =============================================================================
// Tool Models
// =============================================================================

/// HTTP verb used to reach a tool's backend endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
}

/// The single named string field a tool accepts and forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolArgument {
    pub name: &'static str,
    pub description: &'static str,
}

/// How a successful backend body is turned into the tool's text answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Read one field of the body, falling back to `placeholder` when absent
    Field {
        key: &'static str,
        placeholder: &'static str,
    },
    /// Return the whole body as pretty-printed JSON
    Document,
}

impl Reply {
    pub fn render(&self, body: &Value) -> String {
        match self {
            Reply::Field { key, placeholder } => match body.get(*key) {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Null) | None => placeholder.to_string(),
                Some(other) => other.to_string(),
            },
            Reply::Document => {
                serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())
            }
        }
    }
}

/// Static description of a tool and the backend call behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub argument: Option<ToolArgument>,
    /// Path on the agent service, starting with `/`
    pub endpoint: &'static str,
    pub method: HttpVerb,
    pub timeout: Duration,
    pub reply: Reply,
}

impl ToolSpec {
    /// Builds the advertised descriptor for `tools/list`
    pub fn descriptor(&self) -> ToolDescriptor {
        let input_schema = match self.argument {
            Some(arg) => json!({
                "type": "object",
                "properties": {
                    arg.name: {
                        "type": "string",
                        "description": arg.description
                    }
                },
                "required": [arg.name]
            }),
            None => json!({
                "type": "object",
                "properties": {}
            }),
        };

        ToolDescriptor {
            name: self.name,
            description: self.description,
            input_schema,
        }
    }

    /// Selects the argument the backend expects and drops everything else.
    ///
    /// A missing argument is forwarded as an empty string.
    pub fn shape_request(&self, arguments: &Map<String, Value>) -> Value {
        let mut body = Map::new();
        if let Some(arg) = self.argument {
            let value = arguments
                .get(arg.name)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()));
            body.insert(arg.name.to_string(), value);
        }
        Value::Object(body)
    }
}

/// Tool entry as advertised through `tools/list`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

// =============================================================================
// Health Models
// =============================================================================

/// Reachability of the agent service as seen by one health check
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    Connected,
    Error,
    Disconnected,
}

/// Result of probing the agent service `/health` endpoint.
///
/// Computed fresh for every check, never cached.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BackendHealth {
    pub status: BackendStatus,
    pub url: String,

    /// The agent's own health payload, present when connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<Value>,

    /// Failure detail, present when not connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackendHealth {
    pub fn connected(url: &str, health: Value) -> Self {
        Self {
            status: BackendStatus::Connected,
            url: url.to_string(),
            health: Some(health),
            error: None,
        }
    }

    pub fn error(url: &str, detail: impl Into<String>) -> Self {
        Self {
            status: BackendStatus::Error,
            url: url.to_string(),
            health: None,
            error: Some(detail.into()),
        }
    }

    pub fn disconnected(url: &str, detail: impl Into<String>) -> Self {
        Self {
            status: BackendStatus::Disconnected,
            url: url.to_string(),
            health: None,
            error: Some(detail.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status == BackendStatus::Connected
    }
}
