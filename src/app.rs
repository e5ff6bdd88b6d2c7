//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::actions;
use crate::config::ApiConfig;
use crate::net::api::HttpChatApi;
use crate::pages::{chat::ChatPage, login::LoginPage};
use crate::state::settings::CipherSettings;
use crate::state::store::{Action, AppState, Dispatcher, Store};
use crate::util::ui_persistence;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store and API client to every route and starts the session
/// restore before any route renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = ui_persistence::load_cipher_method().map(CipherSettings::with_method).unwrap_or_default();
    let store = Store::new(AppState::with_settings(settings));
    let api = HttpChatApi::new(ApiConfig::from_build_env());

    provide_context(store);
    provide_context(api.clone());

    // Mark auth as loading up front so the unauthenticated redirect waits
    // for the restore to finish.
    store.dispatch(Action::AuthStarted);
    actions::spawn(async move { actions::restore_session(&store, &api).await });

    view! {
        <Stylesheet id="leptos" href="/pkg/cipherchat.css"/>
        <Title text="Cipher Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
