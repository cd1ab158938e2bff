//! HTTP layer for request/response handling.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Redirect and observability middleware

pub mod handlers;
pub mod middleware;
