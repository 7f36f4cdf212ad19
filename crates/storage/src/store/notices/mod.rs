#![forbid(unsafe_code)]

mod create;
mod delete;
mod get;
mod list;
mod search;
mod update;
