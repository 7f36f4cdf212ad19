#![forbid(unsafe_code)]

use crate::{
    INVALID_PARAMS, JsonRpcRequest, McpServer, METHOD_NOT_FOUND, NOT_INITIALIZED, ServerStore,
};
use serde_json::{Value, json};

impl McpServer {
    pub(crate) fn new(store: ServerStore) -> Self {
        Self {
            initialized: false,
            store,
        }
    }

    /// Handles one JSON-RPC message. Notifications produce no response.
    pub(crate) fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();
        tracing::debug!(method, "json-rpc request");

        if method == "initialize" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": crate::MCP_VERSION,
                    "serverInfo": { "name": crate::SERVER_NAME, "version": crate::SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            ));
        }

        if method == "notifications/initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            if request.id.is_none() {
                return None;
            }
            return Some(crate::json_rpc_error(
                request.id,
                NOT_INITIALIZED,
                "Server not initialized",
            ));
        }

        if method == "ping" {
            return Some(crate::json_rpc_response(request.id, json!({})));
        }

        if method == "tools/list" {
            return Some(crate::json_rpc_response(
                request.id,
                json!({ "tools": crate::handlers::handler_definitions() }),
            ));
        }

        if method == "tools/call" {
            let Some(params_obj) = request.params.as_ref().and_then(|v| v.as_object()) else {
                return Some(crate::json_rpc_error(
                    request.id,
                    INVALID_PARAMS,
                    "params must be an object",
                ));
            };
            let Some(tool_name) = params_obj.get("name").and_then(|v| v.as_str()) else {
                return Some(crate::json_rpc_error(
                    request.id,
                    INVALID_PARAMS,
                    "params.name must be a string",
                ));
            };
            let args = params_obj
                .get("arguments")
                .cloned()
                .unwrap_or_else(|| json!({}));
            let response_body = self.call_tool(tool_name, args);

            return Some(crate::json_rpc_response(
                request.id,
                json!({
                    "content": [crate::tool_text_content(&response_body)],
                    "isError": !response_body.get("success").and_then(|v| v.as_bool()).unwrap_or(false)
                }),
            ));
        }

        if request.id.is_none() {
            // Unknown notifications are ignored.
            return None;
        }
        Some(crate::json_rpc_error(
            request.id,
            METHOD_NOT_FOUND,
            &format!("Method not found: {method}"),
        ))
    }

    pub(crate) fn call_tool(&mut self, name: &str, args: Value) -> Value {
        match crate::handlers::dispatch_handler(self, name, args) {
            Some(resp) => resp,
            None => {
                tracing::warn!(tool = name, "unknown tool");
                crate::ai_error_with(
                    "UNKNOWN_TOOL",
                    &format!("Unknown tool: {name}"),
                    Some("Call tools/list for the available tools."),
                )
            }
        }
    }
}
