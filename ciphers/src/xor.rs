//! Repeating-key XOR over UTF-8 bytes with lowercase hex output.

#[cfg(test)]
#[path = "xor_test.rs"]
mod xor_test;

use crate::{CipherError, CipherMethod};

pub(crate) fn check_key(key: &str) -> Result<(), CipherError> {
    if key.is_empty() {
        return Err(CipherError::InvalidKey {
            method: CipherMethod::Xor,
            reason: "key is required",
        });
    }
    Ok(())
}

pub(crate) fn encrypt(key: &str, plaintext: &str) -> Result<String, CipherError> {
    check_key(key)?;
    Ok(hex::encode(xor_bytes(key.as_bytes(), plaintext.as_bytes())))
}

pub(crate) fn decrypt(key: &str, ciphertext: &str) -> Result<String, CipherError> {
    check_key(key)?;
    let bytes = hex::decode(ciphertext.trim()).map_err(malformed)?;
    let plain = xor_bytes(key.as_bytes(), &bytes);
    String::from_utf8(plain).map_err(|_| CipherError::InvalidUtf8(CipherMethod::Xor))
}

fn xor_bytes(key: &[u8], data: &[u8]) -> Vec<u8> {
    data.iter()
        .zip(key.iter().cycle())
        .map(|(byte, k)| byte ^ k)
        .collect()
}

fn malformed(err: hex::FromHexError) -> CipherError {
    let reason = match err {
        hex::FromHexError::OddLength => "odd number of hex digits",
        hex::FromHexError::InvalidHexCharacter { .. } => "non-hex character",
        hex::FromHexError::InvalidStringLength => "unexpected length",
    };
    CipherError::MalformedCiphertext {
        method: CipherMethod::Xor,
        reason,
    }
}
