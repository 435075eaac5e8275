//! Wire types for the identity-service contract.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::session::store::Session;
use crate::state::auth::{AuthMode, CredentialDraft};

/// Authenticated user profile, cached alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Request body for an authentication attempt, shaped by mode.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum AuthPayload {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
        #[serde(rename = "confirmPassword")]
        confirm_password: String,
    },
}

impl AuthPayload {
    /// Build the mode-shaped payload from a validated draft.
    pub fn from_draft(draft: &CredentialDraft, mode: AuthMode) -> Self {
        match mode {
            AuthMode::SignIn => Self::Login {
                email: draft.email.clone(),
                password: draft.password.clone(),
            },
            AuthMode::SignUp => Self::Signup {
                name: draft.name.clone(),
                email: draft.email.clone(),
                password: draft.password.clone(),
                confirm_password: draft.confirm_password.clone(),
            },
        }
    }

    /// The endpoint this payload is posted to.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Login { .. } => "/api/auth/login",
            Self::Signup { .. } => "/api/auth/signup",
        }
    }
}

/// Successful authentication response body.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl AuthResponse {
    /// Fold the flat response into the persisted session shape.
    pub fn into_session(self) -> Session {
        Session {
            token: self.token,
            user: User {
                id: self.id,
                name: self.name,
                email: self.email,
                role: self.role,
            },
        }
    }
}

/// Failure response body; the message is optional.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
