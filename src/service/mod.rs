//! Service layer for the contacts server.
//!
//! This module holds the person store and the contact operations
//! the GraphQL resolvers call into.

pub mod contacts;
pub mod store;

pub use contacts::{seed_persons, ContactService};
pub use store::{InMemoryPersonStore, PersonStore};
