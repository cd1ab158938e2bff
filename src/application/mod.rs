//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations on top of the rule source
//! trait and provides a clean API for the HTTP middleware.
//!
//! # Available Services
//!
//! - [`services::rule_cache::RuleCache`] - Self-refreshing redirect rule cache

pub mod services;
