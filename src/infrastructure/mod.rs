//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer,
//! providing concrete rule source implementations.
//!
//! # Modules
//!
//! - [`source`] - Rule source implementations (PostgreSQL and JSON file)

pub mod source;
