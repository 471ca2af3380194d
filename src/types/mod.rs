//! Core type definitions for the contacts server.

pub mod person;

pub use person::*;
