#![forbid(unsafe_code)]

use nb_core::{MAX_DESCRIPTION_CHARS, MAX_ID_CHARS, MAX_TITLE_CHARS};
use serde_json::{Value, json};

pub(crate) const DEFAULT_PAGE_LIMIT: i64 = 20;

fn id_schema() -> Value {
    json!({
        "type": "string",
        "maxLength": MAX_ID_CHARS,
        "pattern": "^\\s*[A-Za-z0-9_-]+\\s*$",
        "description": "Notice id: letters, digits, '-' or '_'. Surrounding whitespace is trimmed."
    })
}

fn title_schema() -> Value {
    json!({ "type": "string", "maxLength": MAX_TITLE_CHARS })
}

fn description_schema() -> Value {
    json!({ "type": "string", "maxLength": MAX_DESCRIPTION_CHARS })
}

fn by_id(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "description": description,
        "inputSchema": {
            "type": "object",
            "properties": { "id": id_schema() },
            "required": ["id"]
        }
    })
}

pub(crate) fn handler_definitions() -> Vec<Value> {
    let mut handlers = vec![
        json!({
            "name": "notices_create",
            "description": "Create a notice. Omit id to have one generated.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": id_schema(),
                    "title": title_schema(),
                    "description": description_schema(),
                    "isActive": { "type": "boolean", "default": true }
                },
                "required": ["title", "description"]
            }
        }),
        by_id("notices_get", "Fetch one notice by id, active or not."),
        json!({
            "name": "notices_update",
            "description": "Change the given fields of a notice; omitted fields keep their value.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "id": id_schema(),
                    "title": title_schema(),
                    "description": description_schema(),
                    "isActive": { "type": "boolean" }
                },
                "required": ["id"]
            }
        }),
        by_id(
            "notices_delete",
            "Deactivate a notice (soft delete). The record stays readable.",
        ),
        by_id(
            "notices_purge",
            "Remove a notice permanently and free its id.",
        ),
        json!({
            "name": "notices_list_all",
            "description": "Every notice in id order.",
            "inputSchema": { "type": "object", "properties": {}, "required": [] }
        }),
        json!({
            "name": "notices_list",
            "description": "One page of notices in id order, with the total count.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "limit": { "type": "integer", "minimum": 0, "default": DEFAULT_PAGE_LIMIT },
                    "offset": { "type": "integer", "minimum": 0, "default": 0 }
                },
                "required": []
            }
        }),
        json!({
            "name": "notices_search",
            "description": "Notices whose title or description contains the query, ignoring case.",
            "inputSchema": {
                "type": "object",
                "properties": { "query": { "type": "string", "minLength": 1 } },
                "required": ["query"]
            }
        }),
    ];
    handlers.sort_by_key(|tool| {
        tool.get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string()
    });
    handlers
}
