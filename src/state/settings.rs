//! Cipher method and key chosen in the settings modal.

use ciphers::CipherMethod;

/// The method survives reloads via `localStorage`; the key stays in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CipherSettings {
    pub method: CipherMethod,
    pub key: String,
}

impl CipherSettings {
    pub fn with_method(method: CipherMethod) -> Self {
        Self {
            method,
            key: String::new(),
        }
    }
}
