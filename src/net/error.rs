//! Errors surfaced by the chat API client.
//!
//! The UI renders these through `Display`, so messages are short and
//! user-facing.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use ciphers::CipherError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed: {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The message could not be encrypted or decrypted.
    #[error(transparent)]
    Cipher(#[from] CipherError),
    /// HTTP calls are only made from the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// `true` when the server rejected the session (`401`/`403`).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status(401 | 403))
    }
}
