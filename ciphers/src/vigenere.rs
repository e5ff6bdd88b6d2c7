//! Vigenère cipher keyed by an alphabetic word.
//!
//! Only ASCII letters are transformed. The key position advances on letters
//! alone, so spaces and punctuation do not consume key characters.

#[cfg(test)]
#[path = "vigenere_test.rs"]
mod vigenere_test;

use crate::{CipherError, CipherMethod, rotate_letter};

/// Parse a key word into per-letter shifts (`A`/`a` = 0).
pub(crate) fn parse_key(key: &str) -> Result<Vec<u8>, CipherError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(invalid("key is required"));
    }
    if !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(invalid("key must contain letters only"));
    }
    Ok(trimmed.bytes().map(|b| b.to_ascii_lowercase() - b'a').collect())
}

pub(crate) fn encrypt(key: &str, plaintext: &str) -> Result<String, CipherError> {
    let shifts = parse_key(key)?;
    Ok(apply(&shifts, plaintext, |shift| shift))
}

pub(crate) fn decrypt(key: &str, ciphertext: &str) -> Result<String, CipherError> {
    let shifts = parse_key(key)?;
    Ok(apply(&shifts, ciphertext, |shift| (26 - shift) % 26))
}

fn apply(shifts: &[u8], text: &str, direction: impl Fn(u8) -> u8) -> String {
    let mut position = 0usize;
    text.chars()
        .map(|ch| {
            if !ch.is_ascii_alphabetic() {
                return ch;
            }
            let shift = direction(shifts[position % shifts.len()]);
            position += 1;
            rotate_letter(ch, shift)
        })
        .collect()
}

fn invalid(reason: &'static str) -> CipherError {
    CipherError::InvalidKey {
        method: CipherMethod::Vigenere,
        reason,
    }
}
