//! HTTP server module.
//!
//! Binds the configured address, serves the router, and drains connections
//! gracefully on SIGTERM/SIGINT. TLS is deliberately absent: the service is
//! meant to sit behind an orchestrator's ingress or service mesh.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
