//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::store::Store;

/// Redirect to `/login` whenever auth has settled and no session is present.
pub fn install_unauth_redirect<F>(store: Store, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if store.select(|s| s.auth.needs_login()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
