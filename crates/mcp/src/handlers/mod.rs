#![forbid(unsafe_code)]

mod definitions;
mod dispatch;
mod notices;

pub(crate) use definitions::handler_definitions;
pub(crate) use dispatch::dispatch_handler;
