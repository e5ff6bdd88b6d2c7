use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_session() {
    let state = AuthState::default();
    assert!(state.session.is_none());
    assert!(!state.is_authenticated());
    assert_eq!(state.login(), "");
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

// =============================================================
// Redirect rule
// =============================================================

#[test]
fn needs_login_once_settled_without_session() {
    assert!(AuthState::default().needs_login());
}

#[test]
fn needs_login_false_while_loading() {
    let state = AuthState {
        loading: true,
        ..AuthState::default()
    };
    assert!(!state.needs_login());
}

#[test]
fn needs_login_false_when_signed_in() {
    let state = AuthState {
        session: Some(UserSession { login: "ada".to_owned() }),
        ..AuthState::default()
    };
    assert!(!state.needs_login());
    assert_eq!(state.login(), "ada");
}
