//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base is
//! baked in from `CIPHERCHAT_API_BASE` when the crate is compiled. Everything
//! else the browser remembers lives in `localStorage` under the keys below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API base used when `CIPHERCHAT_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "/api";

/// `localStorage` key holding the last selected cipher method.
pub const CIPHER_METHOD_STORAGE_KEY: &str = "cipherchat_cipher_method";

/// Location of the chat backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    /// Build a config for `base_url`. Trailing slashes are dropped so
    /// endpoint joining never produces `//`.
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: trimmed.to_owned(),
        }
    }

    /// Config baked in from the `CIPHERCHAT_API_BASE` build variable.
    pub fn from_build_env() -> Self {
        option_env!("CIPHERCHAT_API_BASE").map_or_else(Self::default, Self::new)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute or root-relative URL for an API path like `"auth/me"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
