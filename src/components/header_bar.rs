//! Top bar: signed-in identity, fetch spinner, retry, and log out.

use leptos::prelude::*;

use crate::actions;
use crate::net::api::HttpChatApi;
use crate::state::store::Store;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let store = expect_context::<Store>();
    let api = expect_context::<HttpChatApi>();

    let login = move || store.select(|s| s.auth.login().to_owned());
    let show_spinner = move || store.select(|s| s.messages.show_spinner());
    let show_retry = move || store.select(|s| s.messages.show_retry());

    let retry_api = api.clone();
    let on_retry = Callback::new(move |()| {
        let api = retry_api.clone();
        actions::spawn(async move { actions::fetch_messages(&store, &api).await });
    });

    let on_logout = Callback::new(move |()| {
        let api = api.clone();
        actions::spawn(async move { actions::logout(&store, &api).await });
    });

    view! {
        <header class="header-bar">
            <div class="header-bar__inner">
                <div class="header-bar__identity">
                    <svg class="header-bar__avatar" viewBox="0 0 24 24" aria-hidden="true">
                        <circle cx="12" cy="8" r="4"></circle>
                        <path d="M4 20c0-4 4-6 8-6s8 2 8 6"></path>
                    </svg>
                    <span class="header-bar__login">{login}</span>
                </div>
                <Show when=show_spinner>
                    <span class="header-bar__spinner" role="status" aria-label="Loading messages"></span>
                </Show>
                <Show when=show_retry>
                    <button class="header-bar__retry" title="Retry" on:click=move |_| on_retry.run(())>
                        <svg viewBox="0 0 20 20" aria-hidden="true">
                            <path d="M4 10a6 6 0 1 0 2-4.5"></path>
                            <path d="M4 3v3h3"></path>
                        </svg>
                    </button>
                </Show>
                <button class="btn header-bar__logout" on:click=move |_| on_logout.run(())>
                    "Log Out"
                </button>
            </div>
        </header>
    }
}
