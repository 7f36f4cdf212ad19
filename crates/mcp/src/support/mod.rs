#![forbid(unsafe_code)]

mod ai;
mod args;
mod jsonrpc;
mod render;
mod time;

pub(crate) use ai::*;
pub(crate) use args::*;
pub(crate) use jsonrpc::*;
pub(crate) use render::*;
pub(crate) use time::*;
