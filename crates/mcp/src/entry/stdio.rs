#![forbid(unsafe_code)]

use super::framing::{StdioMode, detect_mode_from_first_line, read_content_length_frame, write_message};
use crate::{INVALID_REQUEST, JsonRpcRequest, McpServer, PARSE_ERROR, json_rpc_error};
use serde_json::Value;
use std::io::{BufRead, Write};

/// Serves requests from `reader` until EOF, writing responses to `writer`.
///
/// Framing is detected once from the first non-blank line and used for every
/// response, so the two styles are never interleaved.
pub(crate) fn run_stdio(
    server: &mut McpServer,
    mut reader: impl BufRead,
    mut writer: impl Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut mode: Option<StdioMode> = None;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        let current = match mode {
            Some(current) => current,
            None => match detect_mode_from_first_line(&line) {
                Some(detected) => {
                    tracing::debug!(mode = ?detected, "stdio framing detected");
                    mode = Some(detected);
                    detected
                }
                None => continue,
            },
        };

        let body = match current {
            StdioMode::NewlineJson => {
                let raw = line.trim();
                if raw.is_empty() {
                    continue;
                }
                raw.as_bytes().to_vec()
            }
            StdioMode::ContentLength => {
                if line.trim().is_empty() {
                    continue;
                }
                match read_content_length_frame(&mut reader, line)? {
                    Some(body) => body,
                    None => break,
                }
            }
        };

        if let Some(resp) = handle_message(server, &body) {
            write_message(&mut writer, current, &resp)?;
        }
    }

    Ok(())
}

fn handle_message(server: &mut McpServer, body: &[u8]) -> Option<Value> {
    let data: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "unparseable JSON-RPC message");
            return Some(json_rpc_error(None, PARSE_ERROR, &format!("Parse error: {e}")));
        }
    };

    let (id, has_method) = match data.as_object() {
        Some(obj) => (obj.get("id").cloned(), obj.contains_key("method")),
        None => return Some(json_rpc_error(None, INVALID_REQUEST, "Invalid Request")),
    };
    if !has_method {
        return Some(json_rpc_error(id, INVALID_REQUEST, "Invalid Request"));
    }

    match serde_json::from_value::<JsonRpcRequest>(data) {
        Ok(request) if !request.has_supported_version() => Some(json_rpc_error(
            id,
            INVALID_REQUEST,
            "Invalid Request: jsonrpc must be \"2.0\"",
        )),
        Ok(request) => server.handle(request),
        Err(e) => Some(json_rpc_error(
            id,
            INVALID_REQUEST,
            &format!("Invalid Request: {e}"),
        )),
    }
}
