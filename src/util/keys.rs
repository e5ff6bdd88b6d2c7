//! Keyboard conventions shared by text inputs.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// Enter submits; Shift+Enter inserts a newline.
pub fn is_submit_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}
