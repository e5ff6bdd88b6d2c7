//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the unauthenticated redirect and the header bar to coordinate
//! login redirects and identity display.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserSession;

/// Authentication state tracking the current session and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<UserSession>,
    /// A session restore or login request is in flight.
    pub loading: bool,
    /// Last login failure, shown on the login page.
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Login identifier, or `""` when signed out.
    pub fn login(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.login.as_str())
    }

    /// Auth has settled and nobody is signed in.
    pub fn needs_login(&self) -> bool {
        !self.loading && self.session.is_none()
    }
}
