//! Contacts GraphQL Server
//!
//! A small GraphQL API over an in-memory contact list: count, list and filter
//! by phone presence, find by name, add a person, and update a phone number.
//!
//! # Architecture
//!
//! 1. **Types** (`types`) - `Person`, derived `Address`, `PhoneFilter`
//! 2. **Service Layer** (`service`) - person store and contact operations
//! 3. **GraphQL Layer** (`graphql`) - schema and resolvers
//! 4. **HTTP Layer** (`http`) - axum transport, CORS, health and metrics

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod metrics;
pub mod service;
pub mod types;

pub use error::{Error, Result};

/// Server version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
