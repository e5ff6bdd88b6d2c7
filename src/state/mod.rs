//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `messages`, `current_message`,
//! `settings`) so display rules stay next to the data they read. The slices
//! are aggregated into a single `AppState` in `store`, which is the only
//! place they are mutated.

pub mod auth;
pub mod current_message;
pub mod messages;
pub mod settings;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
