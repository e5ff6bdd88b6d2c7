//! Login page with login + password auth.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::actions;
use crate::net::api::HttpChatApi;
use crate::net::types::Credentials;
use crate::state::store::Store;

const MISSING_FIELDS: &str = "Enter both login and password.";

/// Trim both fields and require each to be non-empty.
pub(crate) fn validate_credentials(login: &str, password: &str) -> Result<Credentials, &'static str> {
    let login = login.trim();
    let password = password.trim();
    if login.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials {
        login: login.to_owned(),
        password: password.to_owned(),
    })
}

/// Line shown under the form: local feedback first, then the last login failure
/// recorded in the store.
pub(crate) fn status_line(info: &str, auth_error: Option<&str>) -> Option<String> {
    if !info.is_empty() {
        return Some(info.to_owned());
    }
    auth_error.map(|e| format!("Sign in failed: {e}"))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let api = expect_context::<HttpChatApi>();
    let navigate = use_navigate();

    let login = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = move || store.select(|s| s.auth.loading);
    let status = move || {
        let info = info.get();
        store.select(|s| status_line(&info, s.auth.error.as_deref()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_credentials(&login.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        actions::spawn(async move {
            let result = actions::login(&store, &api, credentials).await;
            // A failure is rendered from the store's auth error.
            info.set(String::new());
            if result.is_ok() {
                password.set(String::new());
                navigate("/", NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Cipher Chat"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Login"
                        disabled=busy
                        prop:value=move || login.get()
                        on:input=move |ev| login.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        disabled=busy
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        "Sign In"
                    </button>
                </form>
                {move || status().map(|text| view! { <p class="login-message">{text}</p> })}
            </div>
        </div>
    }
}
