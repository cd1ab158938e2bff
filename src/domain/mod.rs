//! Domain layer containing business entities and logic.
//!
//! This module implements the core redirect domain following Clean
//! Architecture principles: entities, the rule source trait, and the
//! pure path-matching algorithm, independent of infrastructure
//! concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Redirect rules and rule snapshots
//! - [`repositories`] - Rule source trait definition
//! - [`matcher`] - Pure path matching over a snapshot
//!
//! # Request Flow
//!
//! 1. The redirect middleware asks the rule cache for a snapshot
//! 2. [`matcher::find_redirect`] evaluates the snapshot against the
//!    request path
//! 3. On a match the middleware writes the redirect response; otherwise
//!    the request passes through unmodified

pub mod entities;
pub mod matcher;
pub mod repositories;
