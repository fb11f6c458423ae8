//! HTTP protocol implementation.
//!
//! This module implements an HTTP/1.1 server directly on raw byte streams,
//! with support for keep-alive connections.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`parser`**: Parses incoming HTTP requests from byte buffers
//! - **`request`**: HTTP request representation and parsing utilities
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌──────────────────┐
//!        │ AwaitingRequest  │ ← Wait for incoming request data
//!        └──────┬───────────┘
//!               │ Request framed
//!               ▼
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route to a handler, produce a response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │     Sending      │ ← Write response bytes to the client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Keep-Alive → AwaitingRequest (same connection)
//!               └─ Close → Closed
//! ```
//!
//! End-of-stream before a new request starts is the normal way a client
//! finishes a connection; a framing error mid-request closes the connection
//! without a response, since the stream position is no longer trustworthy.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
