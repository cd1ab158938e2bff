//! HTTP middleware for request processing and observability.

pub mod redirect;
pub mod tracing;
