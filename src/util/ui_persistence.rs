//! Cipher method persistence in browser `localStorage`.
//!
//! Only the method's wire name is stored, under
//! [`CIPHER_METHOD_STORAGE_KEY`]. Cipher keys never touch storage.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use ciphers::CipherMethod;

use crate::config::CIPHER_METHOD_STORAGE_KEY;

/// Stored value back to a method. Unknown or stale values are discarded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub(crate) fn parse_stored_method(raw: &str) -> Option<CipherMethod> {
    match raw.parse() {
        Ok(method) => Some(method),
        Err(e) => {
            log::warn!("ignoring stored cipher method: {e}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Last cipher method chosen in the settings modal.
pub fn load_cipher_method() -> Option<CipherMethod> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(CIPHER_METHOD_STORAGE_KEY).ok().flatten()?;
        parse_stored_method(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

pub fn save_cipher_method(method: CipherMethod) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(CIPHER_METHOD_STORAGE_KEY, method.as_str()).is_err() {
            log::warn!("could not persist cipher method {method}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (CIPHER_METHOD_STORAGE_KEY, method);
    }
}
