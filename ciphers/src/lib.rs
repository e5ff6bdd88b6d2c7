//! Text ciphers used to encode chat messages before they leave the browser.
//!
//! This crate owns the cipher algorithms shared by the client UI and its
//! tests. It performs no I/O; every operation is a pure function of the
//! method, the key, and the input text.

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

mod caesar;
mod vigenere;
mod xor;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned by [`encrypt`], [`decrypt`], and [`validate_key`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CipherError {
    /// The key cannot be used with the selected method.
    #[error("invalid {method} key: {reason}")]
    InvalidKey {
        method: CipherMethod,
        reason: &'static str,
    },
    /// The input is not a ciphertext this method could have produced.
    #[error("malformed {method} ciphertext: {reason}")]
    MalformedCiphertext {
        method: CipherMethod,
        reason: &'static str,
    },
    /// Decrypted bytes are not valid UTF-8, usually because the key is wrong.
    #[error("decrypted {0} text is not valid UTF-8")]
    InvalidUtf8(CipherMethod),
    /// The method name is not one of the known wire names.
    #[error("unknown cipher method: {0}")]
    UnknownMethod(String),
}

/// Available cipher algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherMethod {
    /// Alphabet rotation by an integer shift.
    #[default]
    Caesar,
    /// Polyalphabetic rotation keyed by a word.
    Vigenere,
    /// Byte-wise XOR with the key, hex encoded.
    Xor,
}

impl CipherMethod {
    /// Every method, in display order.
    pub const ALL: [Self; 3] = [Self::Caesar, Self::Vigenere, Self::Xor];

    /// Stable wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::Xor => "xor",
        }
    }

    /// Human-readable name for selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar",
            Self::Vigenere => "Vigenère",
            Self::Xor => "XOR",
        }
    }

    /// Short description of what a valid key looks like.
    #[must_use]
    pub fn key_hint(self) -> &'static str {
        match self {
            Self::Caesar => "Whole number shift, e.g. 3",
            Self::Vigenere => "Letters only, e.g. LEMON",
            Self::Xor => "Any non-empty text",
        }
    }
}

impl fmt::Display for CipherMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherMethod {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "caesar" => Ok(Self::Caesar),
            "vigenere" => Ok(Self::Vigenere),
            "xor" => Ok(Self::Xor),
            _ => Err(CipherError::UnknownMethod(s.to_owned())),
        }
    }
}

/// Check that `key` is usable with `method` without encrypting anything.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] describing why the key was rejected.
pub fn validate_key(method: CipherMethod, key: &str) -> Result<(), CipherError> {
    match method {
        CipherMethod::Caesar => caesar::parse_shift(key).map(|_| ()),
        CipherMethod::Vigenere => vigenere::parse_key(key).map(|_| ()),
        CipherMethod::Xor => xor::check_key(key),
    }
}

/// Encrypt `plaintext` with `method` and `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key is rejected by [`validate_key`].
pub fn encrypt(method: CipherMethod, key: &str, plaintext: &str) -> Result<String, CipherError> {
    match method {
        CipherMethod::Caesar => caesar::encrypt(key, plaintext),
        CipherMethod::Vigenere => vigenere::encrypt(key, plaintext),
        CipherMethod::Xor => xor::encrypt(key, plaintext),
    }
}

/// Decrypt `ciphertext` produced by [`encrypt`] with the same method and key.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] for rejected keys, and
/// [`CipherError::MalformedCiphertext`] or [`CipherError::InvalidUtf8`] when
/// the XOR payload cannot be decoded.
pub fn decrypt(method: CipherMethod, key: &str, ciphertext: &str) -> Result<String, CipherError> {
    match method {
        CipherMethod::Caesar => caesar::decrypt(key, ciphertext),
        CipherMethod::Vigenere => vigenere::decrypt(key, ciphertext),
        CipherMethod::Xor => xor::decrypt(key, ciphertext),
    }
}

/// Rotate an ASCII letter by `shift` positions, preserving case.
/// Non-letters are returned unchanged.
pub(crate) fn rotate_letter(ch: char, shift: u8) -> char {
    let base = match ch {
        'a'..='z' => b'a',
        'A'..='Z' => b'A',
        _ => return ch,
    };
    let offset = (ch as u8 - base + shift % 26) % 26;
    char::from(base + offset)
}
