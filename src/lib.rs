// src/lib.rs — Library root for embedscope

pub mod cli;
pub mod client;
pub mod infra;
pub mod playground;
pub mod tui;
