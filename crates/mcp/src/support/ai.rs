#![forbid(unsafe_code)]

use nb_storage::{MapError, StoreError};
use serde_json::{Value, json};

pub(crate) fn ai_ok_with_warnings(intent: &str, result: Value, warnings: Vec<Value>) -> Value {
    json!({
        "success": true,
        "intent": intent,
        "result": result,
        "warnings": warnings,
        "error": null
    })
}

pub(crate) fn warning(code: &str, message: &str) -> Value {
    json!({ "code": code, "message": message })
}

pub(crate) fn ai_error(code: &str, message: &str) -> Value {
    ai_error_with(code, message, None)
}

pub(crate) fn ai_error_with(code: &str, message: &str, recovery: Option<&str>) -> Value {
    let mut error_obj = serde_json::Map::new();
    error_obj.insert("code".to_string(), Value::String(code.to_string()));
    error_obj.insert(
        "message".to_string(),
        Value::String(message.trim().to_string()),
    );
    if let Some(recovery) = recovery {
        error_obj.insert(
            "recovery".to_string(),
            Value::String(recovery.trim().to_string()),
        );
    }

    json!({
        "success": false,
        "intent": "error",
        "result": {},
        "warnings": [],
        "error": Value::Object(error_obj)
    })
}

/// Maps a store failure onto a stable error code with a recovery hint.
pub(crate) fn store_error(err: StoreError) -> Value {
    match &err {
        StoreError::InvalidInput(msg) => ai_error("INVALID_INPUT", msg),
        StoreError::NotFound { id } => ai_error_with(
            "NOT_FOUND",
            &format!("Notice not found: {id}"),
            Some("Use notices_list or notices_search to find an existing id."),
        ),
        StoreError::AlreadyExists { id } => ai_error_with(
            "ALREADY_EXISTS",
            &format!("Notice already exists: {id}"),
            Some("Pick another id, omit id to have one generated, or use notices_update."),
        ),
        StoreError::Decode { key, .. } => ai_error_with(
            "CORRUPT_RECORD",
            &err.to_string(),
            Some(&format!(
                "The stored record cannot be read; notices_purge with id={key} removes it."
            )),
        ),
        StoreError::Map(MapError::KeyTooLarge { .. } | MapError::ValueTooLarge { .. }) => {
            ai_error_with(
                "STORE_ERROR",
                &err.to_string(),
                Some("Raise --max-value-bytes or shorten the notice."),
            )
        }
        StoreError::IdGeneration { .. } | StoreError::Map(_) => {
            ai_error("STORE_ERROR", &err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(resp: &Value) -> Option<&str> {
        resp.get("error")
            .and_then(|v| v.get("code"))
            .and_then(|v| v.as_str())
    }

    #[test]
    fn store_errors_map_to_stable_codes() {
        let cases = [
            (StoreError::InvalidInput("bad".into()), "INVALID_INPUT"),
            (StoreError::NotFound { id: "n1".into() }, "NOT_FOUND"),
            (StoreError::AlreadyExists { id: "n1".into() }, "ALREADY_EXISTS"),
            (
                StoreError::Decode {
                    key: "n1".into(),
                    source: nb_storage::DecodeError::MissingField("title"),
                },
                "CORRUPT_RECORD",
            ),
            (StoreError::IdGeneration { attempts: 8 }, "STORE_ERROR"),
            (
                StoreError::Map(MapError::ValueTooLarge { len: 9, max: 8 }),
                "STORE_ERROR",
            ),
        ];
        for (err, expected) in cases {
            let resp = store_error(err);
            assert_eq!(resp.get("success"), Some(&Value::Bool(false)));
            assert_eq!(code(&resp), Some(expected));
        }
    }

    #[test]
    fn ok_envelope_shape() {
        let resp = ai_ok_with_warnings("notices_get", json!({ "id": "n1" }), Vec::new());
        assert_eq!(resp["success"], Value::Bool(true));
        assert_eq!(resp["intent"], "notices_get");
        assert_eq!(resp["error"], Value::Null);
        assert_eq!(resp["warnings"], json!([]));
    }
}
