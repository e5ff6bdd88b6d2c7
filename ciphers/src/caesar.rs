//! Caesar shift over the ASCII alphabet.

#[cfg(test)]
#[path = "caesar_test.rs"]
mod caesar_test;

use crate::{CipherError, CipherMethod, rotate_letter};

/// Parse a shift key into its forward rotation in `0..26`.
///
/// Keys of any length are accepted; digits are folded mod 26 so the value
/// never has to fit a machine integer.
pub(crate) fn parse_shift(key: &str) -> Result<u8, CipherError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(invalid("key is required"));
    }
    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("key must be a whole number"));
    }
    let rotation = digits
        .bytes()
        .fold(0u32, |acc, b| (acc * 10 + u32::from(b - b'0')) % 26);
    let rotation = if negative { (26 - rotation) % 26 } else { rotation };
    u8::try_from(rotation).map_err(|_| invalid("key out of range"))
}

pub(crate) fn encrypt(key: &str, plaintext: &str) -> Result<String, CipherError> {
    let shift = parse_shift(key)?;
    Ok(plaintext.chars().map(|ch| rotate_letter(ch, shift)).collect())
}

pub(crate) fn decrypt(key: &str, ciphertext: &str) -> Result<String, CipherError> {
    let shift = parse_shift(key)?;
    let inverse = (26 - shift) % 26;
    Ok(ciphertext.chars().map(|ch| rotate_letter(ch, inverse)).collect())
}

fn invalid(reason: &'static str) -> CipherError {
    CipherError::InvalidKey {
        method: CipherMethod::Caesar,
        reason,
    }
}
