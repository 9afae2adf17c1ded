//! Integration tests for Marquee
//!
//! These tests verify the integration between different components of the
//! system: the HTTP existence probe against a real static server, and the
//! full resolve-then-mount session flow.

#[path = "integration/http_probe.rs"]
mod http_probe;

#[path = "integration/session_flow.rs"]
mod session_flow;
