#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Value, json};

pub(crate) const PARSE_ERROR: i64 = -32700;
pub(crate) const INVALID_REQUEST: i64 = -32600;
pub(crate) const METHOD_NOT_FOUND: i64 = -32601;
pub(crate) const INVALID_PARAMS: i64 = -32602;
pub(crate) const NOT_INITIALIZED: i64 = -32002;

const JSONRPC_VERSION: &str = "2.0";

/// One decoded request or notification. A missing `id` marks a notification.
#[derive(Debug, Deserialize)]
pub(crate) struct JsonRpcRequest {
    #[serde(default, rename = "jsonrpc")]
    pub(crate) version: Option<String>,
    pub(crate) method: String,
    #[serde(default)]
    pub(crate) id: Option<Value>,
    #[serde(default)]
    pub(crate) params: Option<Value>,
}

impl JsonRpcRequest {
    /// Lenient version check: an absent `jsonrpc` member is tolerated, any
    /// value other than `"2.0"` is not.
    pub(crate) fn has_supported_version(&self) -> bool {
        self.version.as_deref().is_none_or(|v| v == JSONRPC_VERSION)
    }
}

fn envelope(id: Option<Value>, key: &str, payload: Value) -> Value {
    let mut message = serde_json::Map::new();
    message.insert("jsonrpc".to_string(), Value::from(JSONRPC_VERSION));
    message.insert("id".to_string(), id.unwrap_or(Value::Null));
    message.insert(key.to_string(), payload);
    Value::Object(message)
}

pub(crate) fn json_rpc_response(id: Option<Value>, result: Value) -> Value {
    envelope(id, "result", result)
}

pub(crate) fn json_rpc_error(id: Option<Value>, code: i64, message: &str) -> Value {
    envelope(id, "error", json!({ "code": code, "message": message }))
}

/// Wraps a tool envelope as a single MCP text content block.
pub(crate) fn tool_text_content(payload: &Value) -> Value {
    json!({
        "type": "text",
        "text": serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string()),
    })
}
