#![forbid(unsafe_code)]

mod support;
use support::*;

use serde_json::json;

#[test]
fn tools_list_names_every_notice_tool() {
    let mut server = Server::start_initialized();

    let tools_list = server.request(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    }));
    let tools = tools_list
        .get("result")
        .and_then(|v| v.get("tools"))
        .and_then(|v| v.as_array())
        .expect("result.tools");

    let names = tools
        .iter()
        .filter_map(|tool| tool.get("name").and_then(|v| v.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "notices_create",
            "notices_delete",
            "notices_get",
            "notices_list",
            "notices_list_all",
            "notices_purge",
            "notices_search",
            "notices_update",
        ]
    );
    for tool in tools {
        assert!(tool.get("inputSchema").is_some(), "{tool}");
    }
}

#[test]
fn calls_before_initialized_notification_are_rejected() {
    let mut server = Server::start();
    let init = server.request(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {}
    }));
    assert_eq!(
        init.pointer("/result/serverInfo/name").and_then(|v| v.as_str()),
        Some("noticeboard-mcp")
    );

    let early = server.request(json!({
        "jsonrpc": "2.0",
        "id": 2,
        "method": "tools/list",
        "params": {}
    }));
    assert_json_rpc_error(&early, -32002);
}

#[test]
fn protocol_errors_use_json_rpc_codes() {
    let mut server = Server::start_initialized();

    server.send(json!("just a string"));
    assert_json_rpc_error(&server.recv(), -32600);

    let unknown = server.request(json!({ "jsonrpc": "2.0", "id": 3, "method": "nope" }));
    assert_json_rpc_error(&unknown, -32601);

    let bad_params = server.request(json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": "notices_get"
    }));
    assert_json_rpc_error(&bad_params, -32602);

    let ping = server.request(json!({ "jsonrpc": "2.0", "id": 5, "method": "ping" }));
    assert_eq!(ping.get("result"), Some(&json!({})));
}

#[test]
fn stdin_eof_exits_cleanly() {
    let mut server = Server::start_initialized();
    let status = server.shutdown();
    assert!(status.success(), "exit status: {status:?}");
}
