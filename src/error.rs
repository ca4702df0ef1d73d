//! Error types for the relay

use thiserror::Error;

/// JSON-RPC parse error code
pub const PARSE_ERROR: i32 = -32700;
/// JSON-RPC method not found code
pub const METHOD_NOT_FOUND: i32 = -32601;
/// JSON-RPC invalid params code
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC internal error code
pub const INTERNAL_ERROR: i32 = -32603;

/// Result type for MCP request handling
pub type McpResult<T> = Result<T, McpError>;

/// Protocol-level failures while handling a JSON-RPC request.
///
/// The `Display` output is used verbatim as the JSON-RPC error message.
#[derive(Debug, Error)]
pub enum McpError {
    #[error("Unknown method: {0}")]
    MethodNotFound(String),

    #[error("{0}")]
    InvalidParams(String),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    /// Convert error to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams(_) => INVALID_PARAMS,
            McpError::Json(_) => INTERNAL_ERROR,
        }
    }

    /// Internal failures are the only ones surfaced with a 5xx status
    pub fn is_internal(&self) -> bool {
        self.error_code() == INTERNAL_ERROR
    }
}

/// Errors that prevent the relay from starting
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages() {
        let err = McpError::MethodNotFound("resources/list".into());
        assert_eq!(err.error_code(), -32601);
        assert_eq!(err.to_string(), "Unknown method: resources/list");

        let err = McpError::InvalidParams("Tool name is required".into());
        assert_eq!(err.error_code(), -32602);
        assert_eq!(err.to_string(), "Tool name is required");
        assert!(!err.is_internal());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = McpError::from(json_err);
        assert_eq!(err.error_code(), -32603);
        assert!(err.is_internal());
    }
}
