#![forbid(unsafe_code)]

mod read;
mod write;

use crate::{Args, unknown_keys, warning};
use serde_json::Value;

/// One `UNKNOWN_ARG` warning per argument the tool does not take.
fn unknown_arg_warnings(args: &Args, allowed: &[&str]) -> Vec<Value> {
    unknown_keys(args, allowed)
        .into_iter()
        .map(|key| warning("UNKNOWN_ARG", &format!("ignored unknown argument: {key}")))
        .collect()
}
