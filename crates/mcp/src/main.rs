#![forbid(unsafe_code)]

mod config;
mod entry;
mod handlers;
mod server;
mod support;

pub(crate) use support::*;

use clap::Parser;
use config::Cli;
use nb_storage::{MemoryMap, NoticeStore, OrderedKvMap, SqliteMap};

const MCP_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "noticeboard-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The store behind the server; the backend is picked at startup.
pub(crate) type ServerStore = NoticeStore<Box<dyn OrderedKvMap>>;

pub(crate) struct McpServer {
    initialized: bool,
    store: ServerStore,
}

fn init_logging(filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol; logs go to stderr only.
    let filter = tracing_subscriber::EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;
    Ok(())
}

fn open_store(cli: &Cli) -> Result<ServerStore, Box<dyn std::error::Error>> {
    let limits = cli.map_limits()?;
    let map: Box<dyn OrderedKvMap> = if cli.memory {
        tracing::info!("using in-memory notice map; nothing will be persisted");
        Box::new(MemoryMap::with_limits(limits))
    } else {
        let map = SqliteMap::open(&cli.storage_dir)?.with_limits(limits);
        tracing::info!(dir = %cli.storage_dir.display(), "opened notice store");
        Box::new(map)
    };
    Ok(NoticeStore::new(map))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log)?;

    let store = open_store(&cli).inspect_err(|err| {
        tracing::error!(error = %err, "failed to open notice store");
    })?;
    let mut server = McpServer::new(store);

    tracing::info!(version = SERVER_VERSION, "serving MCP over stdio");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    entry::run_stdio(&mut server, stdin.lock(), stdout.lock())?;
    tracing::info!("stdin closed; shutting down");
    Ok(())
}
