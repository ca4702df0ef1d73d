//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC envelopes and MCP
//! content blocks.

use serde_json::{json, Value};

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC success envelope.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier, or `None` when it could not be read;
///   the `id` key is then left out entirely.
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
///
/// # Returns
///
/// A `serde_json::Value` shaped as a JSON-RPC error envelope.
pub fn rpc_error(id: Option<Value>, code: i32, message: impl Into<String>) -> Value {
    let mut envelope = json!({
        "jsonrpc": "2.0",
        "error": {
            "code": code,
            "message": message.into(),
        }
    });

    if let Some(id) = id {
        envelope["id"] = id;
    }

    envelope
}

/// Wraps a tool answer in a single MCP text content block.
pub fn text_content(text: impl Into<String>) -> Value {
    json!({
        "content": [{ "type": "text", "text": text.into() }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_envelopes() {
        let success = rpc_success(json!(1), json!("ok"));
        assert_eq!(success["result"], "ok");
        assert_eq!(success["id"], 1);
        assert!(success.get("error").is_none());

        let error = rpc_error(Some(json!(2)), -32601, "fail");
        assert_eq!(error["error"]["message"], "fail");
        assert_eq!(error["error"]["code"], -32601);
        assert_eq!(error["id"], 2);
        assert!(error.get("result").is_none());
    }

    #[test]
    fn parse_errors_carry_no_id() {
        let error = rpc_error(None, -32700, "Parse error");
        assert!(error.get("id").is_none());
        assert_eq!(error["jsonrpc"], "2.0");
    }

    #[test]
    fn null_ids_are_echoed() {
        let error = rpc_error(Some(Value::Null), -32601, "fail");
        assert_eq!(error.get("id"), Some(&Value::Null));
    }

    #[test]
    fn text_block() {
        assert_eq!(
            text_content("hello"),
            json!({"content": [{"type": "text", "text": "hello"}]})
        );
    }
}
