use super::*;
use futures::executor::block_on;

#[test]
fn endpoints_resolve_against_configured_base() {
    let api = HttpChatApi::new(ApiConfig::new("/chat-api/"));
    assert_eq!(api.config().endpoint(SESSION_PATH), "/chat-api/auth/me");
    assert_eq!(api.config().endpoint(LOGIN_PATH), "/chat-api/auth/login");
    assert_eq!(api.config().endpoint(LOGOUT_PATH), "/chat-api/auth/logout");
    assert_eq!(api.config().endpoint(MESSAGES_PATH), "/chat-api/messages");
}

#[test]
fn native_build_reports_unavailable() {
    let api = HttpChatApi::default();
    assert_eq!(block_on(api.fetch_messages()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.fetch_session()), Err(ApiError::Unavailable));
    assert_eq!(block_on(api.logout()), Err(ApiError::Unavailable));
}
