//! Async thunks: network side effects bracketed by store actions.
//!
//! Each thunk awaits the backend between a "started" action and exactly one
//! success or failure action. Components launch them with [`spawn`], which
//! only schedules work in the browser build.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::ChatApi;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, OutgoingMessage, UserSession};
use crate::state::store::{Action, Dispatcher};

/// Run a thunk on the browser's task queue. A no-op during SSR, where
/// event handlers and effects never fire.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

/// Ask the backend who is signed in.
///
/// The caller dispatches [`Action::AuthStarted`] before spawning this, so auth
/// reads as loading from the first render.
pub async fn restore_session<D: Dispatcher, A: ChatApi>(store: &D, api: &A) {
    let session = match api.fetch_session().await {
        Ok(session) => session,
        Err(e) => {
            log::warn!("session restore failed: {e}");
            None
        }
    };
    store.dispatch(Action::SessionRestored(session));
}

/// Sign in; the returned session lets the caller navigate on success.
///
/// # Errors
///
/// Returns the API error after recording it in the store.
pub async fn login<D: Dispatcher, A: ChatApi>(
    store: &D,
    api: &A,
    credentials: Credentials,
) -> Result<UserSession, ApiError> {
    store.dispatch(Action::AuthStarted);
    match api.login(&credentials).await {
        Ok(session) => {
            log::info!("signed in as {}", session.login);
            store.dispatch(Action::LoginSucceeded(session.clone()));
            Ok(session)
        }
        Err(e) => {
            log::warn!("login failed: {e}");
            store.dispatch(Action::LoginFailed(e.to_string()));
            Err(e)
        }
    }
}

/// End the session. The local session is cleared even if the server call fails.
pub async fn logout<D: Dispatcher, A: ChatApi>(store: &D, api: &A) {
    if let Err(e) = api.logout().await {
        log::warn!("logout request failed: {e}");
    }
    store.dispatch(Action::LoggedOut);
}

/// Load the message list. Ignored while a fetch is already in flight.
pub async fn fetch_messages<D: Dispatcher, A: ChatApi>(store: &D, api: &A) {
    if store.with_state(|s| s.messages.is_loading) {
        log::debug!("message fetch already in flight");
        return;
    }
    store.dispatch(Action::FetchMessagesStarted);
    match api.fetch_messages().await {
        Ok(messages) => {
            log::info!("fetched {} messages", messages.len());
            store.dispatch(Action::FetchMessagesSucceeded(messages));
        }
        Err(e) => {
            log::warn!("message fetch failed: {e}");
            store.dispatch(Action::FetchMessagesFailed(e.to_string()));
        }
    }
}

/// Encrypt the pending draft with the current settings and post it.
///
/// Does nothing without a pending draft or while a send is in flight. Key
/// problems are reported on the draft without touching the network.
pub async fn send_current_message<D: Dispatcher, A: ChatApi>(store: &D, api: &A) {
    let Some((draft, settings)) = store.with_state(|s| {
        if s.current_message.is_sending() {
            return None;
        }
        s.current_message
            .draft()
            .map(|draft| (draft.clone(), s.settings.clone()))
    }) else {
        return;
    };

    let sealed = match ciphers::encrypt(settings.method, &settings.key, &draft.message) {
        Ok(sealed) => sealed,
        Err(e) => {
            store.dispatch(Action::SendFailed(ApiError::from(e).to_string()));
            return;
        }
    };

    let outgoing = OutgoingMessage {
        client_id: uuid::Uuid::new_v4().to_string(),
        message: sealed,
        method: settings.method,
    };

    store.dispatch(Action::SendStarted);
    match api.send_message(&outgoing).await {
        Ok(stored) => {
            log::info!("sent message {} ({})", outgoing.client_id, settings.method);
            store.dispatch(Action::MessageSent(stored));
        }
        Err(e) => {
            log::warn!("send failed: {e}");
            store.dispatch(Action::SendFailed(e.to_string()));
        }
    }
}
