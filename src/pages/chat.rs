//! Chat page: header, message area, composer, and the cipher settings modal.
//! Redirects to `/login` once auth settles without a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::components::composer::Composer;
use crate::components::header_bar::HeaderBar;
use crate::components::information::Information;
use crate::components::message_list::MessageList;
use crate::components::settings_modal::SettingsModal;
use crate::net::api::HttpChatApi;
use crate::state::store::{AppState, Store};
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn ChatPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let api = expect_context::<HttpChatApi>();
    install_unauth_redirect(store, use_navigate());

    // Fetch on mount; reads nothing reactive so it runs once.
    Effect::new(move || {
        let api = api.clone();
        actions::spawn(async move { actions::fetch_messages(&store, &api).await });
    });

    let messages = Signal::derive(move || store.select(|s| s.messages.messages.clone()));
    let has_messages = move || store.select(|s| !s.messages.messages.is_empty());
    let show_empty_state = move || store.select(|s| s.messages.show_empty_state());
    let is_modal_open = Signal::derive(move || store.select(AppState::is_modal_open));

    view! {
        <div class="chat-page">
            <HeaderBar/>
            <main class="chat-page__messages">
                <Show
                    when=has_messages
                    fallback=move || view! {
                        <Show when=show_empty_state>
                            <Information/>
                        </Show>
                    }
                >
                    <MessageList messages=messages/>
                </Show>
            </main>
            <div class="chat-page__composer">
                <Composer/>
            </div>
            <SettingsModal is_modal_open=is_modal_open/>
        </div>
    }
}
