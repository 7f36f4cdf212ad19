#![forbid(unsafe_code)]

use clap::Parser;
use nb_storage::{DEFAULT_MAX_KEY_BYTES, DEFAULT_MAX_VALUE_BYTES, MapLimits, max_encoded_len};
use std::path::PathBuf;

/// Notice board MCP server (JSON-RPC over stdio).
#[derive(Parser, Debug)]
#[command(name = "nb_mcp", version)]
pub(crate) struct Cli {
    /// Directory holding `noticeboard.db`; created if missing.
    #[arg(long, env = "NOTICEBOARD_STORAGE_DIR", default_value = ".noticeboard")]
    pub(crate) storage_dir: PathBuf,

    /// Keep notices in memory only; `--storage-dir` is ignored.
    #[arg(long)]
    pub(crate) memory: bool,

    /// Largest encoded notice the map accepts, in bytes.
    #[arg(long, env = "NOTICEBOARD_MAX_VALUE_BYTES", default_value_t = DEFAULT_MAX_VALUE_BYTES)]
    pub(crate) max_value_bytes: usize,

    /// Log filter directive (stderr), e.g. `info` or `nb_storage=debug`.
    #[arg(long, env = "NOTICEBOARD_LOG", default_value = "info")]
    pub(crate) log: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("--max-value-bytes {max_value_bytes} is below the largest possible notice ({required} bytes)")]
pub(crate) struct ConfigError {
    max_value_bytes: usize,
    required: usize,
}

impl Cli {
    /// Map limits for the configured backend. A value cap smaller than the
    /// worst-case encoding would let valid notices fail on write.
    pub(crate) fn map_limits(&self) -> Result<MapLimits, ConfigError> {
        let required = max_encoded_len();
        if self.max_value_bytes < required {
            return Err(ConfigError {
                max_value_bytes: self.max_value_bytes,
                required,
            });
        }
        Ok(MapLimits {
            max_key_bytes: DEFAULT_MAX_KEY_BYTES,
            max_value_bytes: self.max_value_bytes,
        })
    }
}
