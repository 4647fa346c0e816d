//! hello-kubernetes: a minimal HTTP demo service for container orchestration.
//!
//! Exposes a greeting page reporting hostname/version/environment plus
//! liveness and readiness probes. Configuration comes from three environment
//! variables read once at startup; request handlers are stateless.
//!
//! The modules are exposed as a library so the binary and the integration
//! tests share the same router and configuration code.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
