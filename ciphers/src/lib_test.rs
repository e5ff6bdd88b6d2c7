use super::*;

#[test]
fn method_wire_names_round_trip_through_from_str() {
    for method in CipherMethod::ALL {
        assert_eq!(method.as_str().parse::<CipherMethod>(), Ok(method));
    }
}

#[test]
fn method_from_str_ignores_case_and_whitespace() {
    assert_eq!(" Vigenere ".parse::<CipherMethod>(), Ok(CipherMethod::Vigenere));
    assert_eq!("XOR".parse::<CipherMethod>(), Ok(CipherMethod::Xor));
}

#[test]
fn method_from_str_rejects_unknown_names() {
    assert_eq!(
        "rot13".parse::<CipherMethod>(),
        Err(CipherError::UnknownMethod("rot13".to_owned()))
    );
}

#[test]
fn method_serializes_as_lowercase_wire_name() {
    let json = serde_json::to_string(&CipherMethod::Vigenere).expect("serialize");
    assert_eq!(json, "\"vigenere\"");
    let back: CipherMethod = serde_json::from_str("\"xor\"").expect("deserialize");
    assert_eq!(back, CipherMethod::Xor);
}

#[test]
fn method_default_is_caesar() {
    assert_eq!(CipherMethod::default(), CipherMethod::Caesar);
}

#[test]
fn validate_key_dispatches_per_method() {
    assert!(validate_key(CipherMethod::Caesar, "7").is_ok());
    assert!(validate_key(CipherMethod::Caesar, "seven").is_err());
    assert!(validate_key(CipherMethod::Vigenere, "lemon").is_ok());
    assert!(validate_key(CipherMethod::Vigenere, "lem0n").is_err());
    assert!(validate_key(CipherMethod::Xor, "k").is_ok());
    assert!(validate_key(CipherMethod::Xor, "").is_err());
}

#[test]
fn every_method_decrypts_its_own_output() {
    let keys = [(CipherMethod::Caesar, "11"), (CipherMethod::Vigenere, "Secret"), (CipherMethod::Xor, "pässwörd")];
    let text = "Meet me at 10:30, by the old gate! ✓";
    for (method, key) in keys {
        let sealed = encrypt(method, key, text).expect("encrypt");
        assert_ne!(sealed, text, "{method} should change the text");
        assert_eq!(decrypt(method, key, &sealed).expect("decrypt"), text);
    }
}

#[test]
fn invalid_key_error_names_the_method() {
    let err = encrypt(CipherMethod::Vigenere, "", "hi").expect_err("empty key");
    assert_eq!(err.to_string(), "invalid vigenere key: key is required");
}

#[test]
fn rotate_letter_wraps_and_preserves_case() {
    assert_eq!(rotate_letter('z', 1), 'a');
    assert_eq!(rotate_letter('Y', 3), 'B');
    assert_eq!(rotate_letter('5', 3), '5');
}
