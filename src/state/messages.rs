//! Message list state and the display rules derived from it.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::ChatMessage;
use crate::state::settings::CipherSettings;

/// Fetched chat history plus the status of the last fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessagesState {
    /// Messages in the order the server returned them; sends append.
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
    /// Last fetch failure; empty when the last fetch succeeded.
    pub error_msg: String,
}

impl MessagesState {
    /// Loading spinner in the header.
    pub fn show_spinner(&self) -> bool {
        self.is_loading
    }

    /// Retry control: only after a failed fetch left the list empty.
    pub fn show_retry(&self) -> bool {
        !self.is_loading && !self.error_msg.is_empty() && self.messages.is_empty()
    }

    /// Empty-state placeholder in the message area.
    pub fn show_empty_state(&self) -> bool {
        self.messages.is_empty() && !self.is_loading
    }
}

/// Plaintext for `message` when it was sealed with the currently selected
/// method and the current key opens it.
pub fn decoded_text(message: &ChatMessage, settings: &CipherSettings) -> Option<String> {
    let method = message.method?;
    if method != settings.method || settings.key.is_empty() {
        return None;
    }
    ciphers::decrypt(method, &settings.key, &message.message)
        .ok()
        .filter(|plain| plain != &message.message)
}
