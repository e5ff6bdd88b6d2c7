//! Networking: wire types, errors, and the REST client.

pub mod api;
pub mod error;
pub mod types;
