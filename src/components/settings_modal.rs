//! Modal that picks a cipher method and key for the pending draft and sends it.

use ciphers::CipherMethod;
use leptos::prelude::*;

use crate::actions;
use crate::net::api::HttpChatApi;
use crate::state::store::{Action, Dispatcher, Store};
use crate::util::keys::is_dismiss_key;
use crate::util::ui_persistence;

/// Open whenever `is_modal_open` is true; closing clears the draft.
#[component]
pub fn SettingsModal(#[prop(into)] is_modal_open: Signal<bool>) -> impl IntoView {
    let store = expect_context::<Store>();
    let api = expect_context::<HttpChatApi>();

    let on_cancel = Callback::new(move |()| store.dispatch(Action::ClearCurrentMessage));

    let on_send = Callback::new(move |()| {
        let api = api.clone();
        actions::spawn(async move { actions::send_current_message(&store, &api).await });
    });

    let on_method_change = Callback::new(move |value: String| match value.parse::<CipherMethod>() {
        Ok(method) => {
            ui_persistence::save_cipher_method(method);
            store.dispatch(Action::SetCipherMethod(method));
        }
        Err(e) => log::warn!("{e}"),
    });

    let draft_text = move || {
        store.select(|s| {
            s.current_message
                .draft()
                .map(|d| d.message.clone())
                .unwrap_or_default()
        })
    };
    let method = move || store.select(|s| s.settings.method);
    let key = move || store.select(|s| s.settings.key.clone());
    let sending = move || store.select(|s| s.current_message.is_sending());
    let error = move || store.select(|s| s.current_message.error().map(str::to_owned));

    view! {
        <Show when=move || is_modal_open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog settings-modal"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if is_dismiss_key(&ev.key()) {
                            ev.prevent_default();
                            on_cancel.run(());
                        }
                    }
                >
                    <h2>"Cipher Settings"</h2>
                    <p class="settings-modal__draft">{draft_text}</p>
                    <label class="dialog__label">
                        "Cipher Method"
                        <select
                            class="dialog__input"
                            prop:value=move || method().as_str()
                            on:change=move |ev| on_method_change.run(event_target_value(&ev))
                        >
                            {CipherMethod::ALL
                                .iter()
                                .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Cipher Key"
                        <input
                            class="dialog__input"
                            type="text"
                            autocomplete="off"
                            placeholder=move || method().key_hint()
                            prop:value=key
                            on:input=move |ev| store.dispatch(Action::SetCipherKey(event_target_value(&ev)))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    on_send.run(());
                                }
                            }
                        />
                    </label>
                    <Show when=move || error().is_some()>
                        <p class="settings-modal__error">{move || error().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" disabled=sending on:click=move |_| on_send.run(())>
                            "Encrypt & Send"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
