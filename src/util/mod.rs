pub mod auth;
pub mod keys;
pub mod ui_persistence;
