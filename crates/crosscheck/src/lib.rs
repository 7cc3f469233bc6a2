//! crosscheck library: configuration and dispatch for the harness binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
