//! Ember - a from-scratch HTTP/1.1 server
//!
//! Core library: wire-level request parsing, response framing, routing,
//! and the per-connection keep-alive state machine.

pub mod config;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
