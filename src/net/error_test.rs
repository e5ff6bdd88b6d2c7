use super::*;
use ciphers::CipherMethod;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
}

#[test]
fn cipher_error_converts_and_displays_transparently() {
    let cipher = CipherError::InvalidKey {
        method: CipherMethod::Caesar,
        reason: "key is required",
    };
    let err: ApiError = cipher.clone().into();
    assert_eq!(err, ApiError::Cipher(cipher));
    assert_eq!(err.to_string(), "invalid caesar key: key is required");
}

#[test]
fn unauthorized_detection_covers_401_and_403_only() {
    assert!(ApiError::Status(401).is_unauthorized());
    assert!(ApiError::Status(403).is_unauthorized());
    assert!(!ApiError::Status(500).is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}
