//! Message composer: text input, send button, fetch error and help text.
//!
//! Submitting does not send anything. It turns the input into a draft in the
//! store, which opens the cipher settings modal.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;

use crate::state::current_message::DraftMessage;
use crate::state::store::{Action, Dispatcher, Store};
use crate::util::keys::is_submit_key;

pub(crate) const HELP_TEXT: &str = "Write your message, choose cipher method and cipher key";

/// Take the composer text as a draft action, clearing the input.
///
/// Whitespace-only input is left untouched and produces no action.
pub(crate) fn submit_draft(input: &mut String) -> Option<Action> {
    if input.trim().is_empty() {
        return None;
    }
    let message = std::mem::take(input);
    Some(Action::SetCurrentMessage(DraftMessage::new(message)))
}

/// What a keydown in the composer does.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum KeyOutcome {
    /// Let the textarea handle the key.
    Passthrough,
    /// Suppress the key's default newline and dispatch the draft, if any.
    Submit(Option<Action>),
}

pub(crate) fn keydown_draft(key: &str, shift: bool, input: &mut String) -> KeyOutcome {
    if !is_submit_key(key, shift) {
        return KeyOutcome::Passthrough;
    }
    KeyOutcome::Submit(submit_draft(input))
}

#[component]
pub fn Composer() -> impl IntoView {
    let store = expect_context::<Store>();
    let input = RwSignal::new(String::new());

    let error = move || store.select(|s| s.messages.error_msg.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut value = input.get_untracked();
        if let Some(action) = submit_draft(&mut value) {
            store.dispatch(action);
            input.set(value);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let mut value = input.get_untracked();
        let KeyOutcome::Submit(action) = keydown_draft(&ev.key(), ev.shift_key(), &mut value) else {
            return;
        };
        ev.prevent_default();
        if let Some(action) = action {
            store.dispatch(action);
            input.set(value);
        }
    };

    view! {
        <form class="composer" novalidate=true on:submit=on_submit>
            <div class="composer__field">
                <textarea
                    class="composer__input"
                    rows="1"
                    required=true
                    autocomplete="off"
                    placeholder="Message is required"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="composer__send" type="submit" title="Send">
                    <svg class="composer__send-icon" viewBox="0 0 20 20" aria-hidden="true">
                        <path d="M3 10 17 3 13 17 10 11Z"></path>
                    </svg>
                </button>
            </div>
            <p class="composer__error">{error}</p>
            <p class="composer__help">{HELP_TEXT}</p>
        </form>
    }
}
