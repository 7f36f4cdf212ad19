#![forbid(unsafe_code)]

use super::ai::ai_error;
use serde_json::Value;

pub(crate) type Args = serde_json::Map<String, Value>;

/// Tool arguments must be a JSON object; a missing `arguments` is `{}`.
pub(crate) fn args_object(args: Value) -> Result<Args, Value> {
    match args {
        Value::Object(obj) => Ok(obj),
        Value::Null => Ok(Args::new()),
        _ => Err(ai_error("INVALID_INPUT", "arguments must be an object")),
    }
}

pub(crate) fn require_string(args: &Args, key: &str) -> Result<String, Value> {
    let Some(v) = args.get(key).and_then(|v| v.as_str()) else {
        return Err(ai_error("INVALID_INPUT", &format!("{key} is required")));
    };
    Ok(v.to_string())
}

pub(crate) fn optional_string(args: &Args, key: &str) -> Result<Option<String>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::String(v) => Ok(Some(v.to_string())),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a string"),
        )),
    }
}

pub(crate) fn optional_bool(args: &Args, key: &str) -> Result<Option<bool>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Bool(v) => Ok(Some(*v)),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be a boolean"),
        )),
    }
}

pub(crate) fn optional_i64(args: &Args, key: &str) -> Result<Option<i64>, Value> {
    let Some(value) = args.get(key) else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| ai_error("INVALID_INPUT", &format!("{key} must be an integer"))),
        _ => Err(ai_error(
            "INVALID_INPUT",
            &format!("{key} must be an integer"),
        )),
    }
}

/// Names in `args` outside `allowed`, sorted; reported back as warnings.
pub(crate) fn unknown_keys(args: &Args, allowed: &[&str]) -> Vec<String> {
    args.keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect()
}
