//! Tournament registration server library.
//!
//! Exposes the HTTP API, configuration, and logging modules so integration
//! tests can build the router without spawning a process.

pub mod api;
pub mod config;
pub mod logging;
