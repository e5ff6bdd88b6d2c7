//! REST client for the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! DESIGN
//! ======
//! Thunks in [`crate::actions`] are written against the [`ChatApi`] trait
//! rather than `HttpChatApi` directly, so they can be driven by an in-memory
//! fake in tests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{ChatMessage, Credentials, OutgoingMessage, UserSession};
use crate::config::ApiConfig;

const SESSION_PATH: &str = "auth/me";
const LOGIN_PATH: &str = "auth/login";
const LOGOUT_PATH: &str = "auth/logout";
const MESSAGES_PATH: &str = "messages";

/// Operations the chat UI needs from its backend.
///
/// Futures are `?Send` because browser futures hold JS handles.
#[async_trait(?Send)]
pub trait ChatApi {
    /// Current session, or `None` when the server reports no login.
    async fn fetch_session(&self) -> Result<Option<UserSession>, ApiError>;

    async fn login(&self, credentials: &Credentials) -> Result<UserSession, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    /// All messages visible to the current user, oldest first.
    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, ApiError>;

    /// Post an encrypted message; returns the server's stored copy.
    async fn send_message(&self, message: &OutgoingMessage) -> Result<ChatMessage, ApiError>;
}

/// [`ChatApi`] backed by `fetch` in the browser.
#[derive(Clone, Debug, Default)]
pub struct HttpChatApi {
    config: ApiConfig,
}

impl HttpChatApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn decode_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn fetch_session(&self) -> Result<Option<UserSession>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(SESSION_PATH);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(network_error)?;
            match decode_json(resp).await {
                Ok(session) => Ok(Some(session)),
                Err(e) if e.is_unauthorized() => Ok(None),
                Err(e) => Err(e),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, SESSION_PATH);
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserSession, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGIN_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, LOGIN_PATH);
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(LOGOUT_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .send()
                .await
                .map_err(network_error)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = LOGOUT_PATH;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_messages(&self) -> Result<Vec<ChatMessage>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(MESSAGES_PATH);
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = MESSAGES_PATH;
            Err(ApiError::Unavailable)
        }
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<ChatMessage, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(MESSAGES_PATH);
            let resp = gloo_net::http::Request::post(&url)
                .json(message)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            decode_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = message;
            Err(ApiError::Unavailable)
        }
    }
}
