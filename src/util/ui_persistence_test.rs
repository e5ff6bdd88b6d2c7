use super::*;

#[test]
fn stored_wire_names_parse_back() {
    for method in CipherMethod::ALL {
        assert_eq!(parse_stored_method(method.as_str()), Some(method));
    }
}

#[test]
fn stale_or_garbled_values_are_discarded() {
    assert_eq!(parse_stored_method("rot13"), None);
    assert_eq!(parse_stored_method("\"caesar\""), None);
    assert_eq!(parse_stored_method(""), None);
}
