//! HTTP calls to the identity service.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! stubs reporting transport failure, since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are folded into [`AuthError`] so the state machine can map
//! each kind to stable user-facing copy; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::AuthPayload;
use crate::session::store::Session;

#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, ErrorBody};

/// Shown when the request never reaches the service.
pub const CONNECTIVITY_ERROR: &str =
    "Unable to connect to server. Please check your connection and try again.";

/// Shown when the service fails without a usable message, or a success
/// response cannot be turned into a session.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// Why an authentication request failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The request could not reach the service.
    Transport,
    /// The service answered with a failure status.
    Service(String),
    /// The service answered with a success status but the body was not a
    /// session.
    InvalidResponse,
}

impl AuthError {
    /// User-facing message for the error banner.
    pub fn message(&self) -> String {
        match self {
            Self::Transport => CONNECTIVITY_ERROR.to_owned(),
            Self::Service(message) => message.clone(),
            Self::InvalidResponse => GENERIC_ERROR.to_owned(),
        }
    }
}

/// Normalize a service-supplied failure message: strip the backend's
/// `"Error: "` prefix and fall back to the generic copy when absent.
pub fn service_message(raw: Option<String>) -> String {
    match raw {
        Some(message) => match message.strip_prefix("Error: ") {
            Some(stripped) => stripped.to_owned(),
            None => message,
        },
        None => GENERIC_ERROR.to_owned(),
    }
}

/// POST the credential payload to its endpoint and parse the session.
///
/// # Errors
///
/// [`AuthError::Transport`] when the request cannot be sent,
/// [`AuthError::Service`] when the service answers with a failure status,
/// [`AuthError::InvalidResponse`] when a success body is not a session.
pub async fn authenticate(payload: &AuthPayload) -> Result<Session, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(payload.endpoint())
            .json(payload)
            .map_err(|_| AuthError::Transport)?
            .send()
            .await
            .map_err(|_| AuthError::Transport)?;

        if !resp.ok() {
            let body = resp.json::<ErrorBody>().await.unwrap_or_default();
            return Err(AuthError::Service(service_message(body.message)));
        }

        let body = resp
            .json::<AuthResponse>()
            .await
            .map_err(|_| AuthError::InvalidResponse)?;
        Ok(body.into_session())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(AuthError::Transport)
    }
}

/// Smoke-test the protected endpoint with a bearer token, returning its
/// plain-text body. Used by the dashboard; not part of the auth state
/// machine.
///
/// # Errors
///
/// Returns a displayable message when the request fails or is rejected.
pub async fn fetch_protected_probe(token: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/test/user")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|_| "Network error".to_owned())?;
        if !resp.ok() {
            return Err("Failed to access protected endpoint".to_owned());
        }
        resp.text().await.map_err(|_| "Network error".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}
