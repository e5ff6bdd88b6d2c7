//! Application state, the closed set of actions that change it, and the
//! store handle components dispatch through.
//!
//! DESIGN
//! ======
//! All mutation funnels through [`AppState::reduce`]. Components read slices
//! reactively via [`Store::select`]; thunks in [`crate::actions`] only see the
//! [`Dispatcher`] trait so tests can substitute a recording store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use ciphers::CipherMethod;
use leptos::prelude::*;

use crate::net::types::{ChatMessage, UserSession};
use crate::state::auth::AuthState;
use crate::state::current_message::{DraftMessage, DraftState};
use crate::state::messages::MessagesState;
use crate::state::settings::CipherSettings;

/// Everything the chat UI renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub auth: AuthState,
    pub messages: MessagesState,
    pub current_message: DraftState,
    pub settings: CipherSettings,
}

/// Every state transition the application performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A session restore or login request started.
    AuthStarted,
    SessionRestored(Option<UserSession>),
    LoginSucceeded(UserSession),
    LoginFailed(String),
    /// Session cleared; also drops messages and any pending draft.
    LoggedOut,
    FetchMessagesStarted,
    /// Ignored unless a fetch is in flight.
    FetchMessagesSucceeded(Vec<ChatMessage>),
    FetchMessagesFailed(String),
    /// Composer submitted; opens the settings modal.
    SetCurrentMessage(DraftMessage),
    /// Settings modal cancelled.
    ClearCurrentMessage,
    SendStarted,
    /// Server accepted the pending draft.
    MessageSent(ChatMessage),
    SendFailed(String),
    SetCipherMethod(CipherMethod),
    SetCipherKey(String),
}

impl Action {
    /// Variant name for logs. Payloads are omitted since they carry message
    /// text and cipher keys.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AuthStarted => "auth_started",
            Self::SessionRestored(_) => "session_restored",
            Self::LoginSucceeded(_) => "login_succeeded",
            Self::LoginFailed(_) => "login_failed",
            Self::LoggedOut => "logged_out",
            Self::FetchMessagesStarted => "fetch_messages_started",
            Self::FetchMessagesSucceeded(_) => "fetch_messages_succeeded",
            Self::FetchMessagesFailed(_) => "fetch_messages_failed",
            Self::SetCurrentMessage(_) => "set_current_message",
            Self::ClearCurrentMessage => "clear_current_message",
            Self::SendStarted => "send_started",
            Self::MessageSent(_) => "message_sent",
            Self::SendFailed(_) => "send_failed",
            Self::SetCipherMethod(_) => "set_cipher_method",
            Self::SetCipherKey(_) => "set_cipher_key",
        }
    }
}

impl AppState {
    pub fn with_settings(settings: CipherSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.current_message.is_modal_open()
    }

    /// Apply one action.
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::AuthStarted => {
                self.auth.loading = true;
                self.auth.error = None;
            }
            Action::SessionRestored(session) => {
                self.auth.session = session;
                self.auth.loading = false;
            }
            Action::LoginSucceeded(session) => {
                self.auth = AuthState {
                    session: Some(session),
                    loading: false,
                    error: None,
                };
            }
            Action::LoginFailed(error) => {
                self.auth = AuthState {
                    session: None,
                    loading: false,
                    error: Some(error),
                };
            }
            Action::LoggedOut => {
                self.auth = AuthState::default();
                self.messages = MessagesState::default();
                self.current_message = DraftState::None;
                self.settings.key.clear();
            }
            Action::FetchMessagesStarted => {
                self.messages.is_loading = true;
                self.messages.error_msg.clear();
            }
            // Results with no fetch in flight belong to a session that has
            // since logged out.
            Action::FetchMessagesSucceeded(_) | Action::FetchMessagesFailed(_) if !self.messages.is_loading => {
                log::debug!("dropping stale {}", action.kind());
            }
            Action::FetchMessagesSucceeded(messages) => {
                self.messages.messages = messages;
                self.messages.is_loading = false;
                self.messages.error_msg.clear();
            }
            Action::FetchMessagesFailed(error) => {
                self.messages.is_loading = false;
                self.messages.error_msg = error;
            }
            Action::SetCurrentMessage(draft) => {
                self.current_message = DraftState::pending(draft);
            }
            Action::ClearCurrentMessage => {
                self.current_message = DraftState::None;
            }
            Action::SendStarted => {
                if let DraftState::Pending(pending) = &mut self.current_message {
                    pending.sending = true;
                    pending.error = None;
                }
            }
            Action::MessageSent(message) => {
                self.messages.messages.push(message);
                self.current_message = DraftState::None;
            }
            Action::SendFailed(error) => {
                // A draft cancelled mid-send has nothing left to annotate.
                if let DraftState::Pending(pending) = &mut self.current_message {
                    pending.sending = false;
                    pending.error = Some(error);
                }
            }
            Action::SetCipherMethod(method) => {
                self.settings.method = method;
                self.clear_draft_error();
            }
            Action::SetCipherKey(key) => {
                self.settings.key = key;
                self.clear_draft_error();
            }
        }
    }

    fn clear_draft_error(&mut self) {
        if let DraftState::Pending(pending) = &mut self.current_message {
            pending.error = None;
        }
    }
}

/// Sink for actions plus untracked read access, shared by the live store and
/// test doubles.
pub trait Dispatcher {
    fn dispatch(&self, action: Action);

    /// Read state without subscribing the caller to changes.
    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R;
}

/// Reactive store handle provided through Leptos context.
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        Self {
            state: RwSignal::new(initial),
        }
    }

    /// Tracked read; use inside reactive closures so the view re-renders.
    pub fn select<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }
}

impl Dispatcher for Store {
    fn dispatch(&self, action: Action) {
        log::debug!("dispatch {}", action.kind());
        self.state.update(|state| state.reduce(action));
    }

    fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with_untracked(f)
    }
}
