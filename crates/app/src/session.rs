//! Sessions
//!
//! The backend issues JWTs; the client only reads the `id` and `role`
//! claims out of the payload to decide what to show and which calls to
//! attempt. Signatures are the backend's business and are not checked here.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::api::{LoginResponse, UserId};

/// Session errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("login required")]
    LoginRequired,

    #[error("admin role required")]
    Forbidden,

    #[error("token is not a JWT")]
    MalformedToken,

    #[error("token payload is not base64url")]
    TokenEncoding(#[source] base64::DecodeError),

    #[error("token payload is not a claims object")]
    TokenClaims(#[source] serde_json::Error),
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Customer,
    #[serde(other)]
    Other,
}

/// Signed-in user as far as the client knows it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    #[serde(default)]
    pub role: Role,
}

impl SessionUser {
    /// Check if the user may use the admin console.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Bearer token and signed-in user for the current run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl Session {
    /// A session with nobody signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Restore a session from a previously issued token.
    ///
    /// A token whose payload cannot be read is kept, so it still goes out
    /// with requests, but no user is signed in.
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();

        let user = match decode_token(&token) {
            Ok(user) => Some(user),
            Err(error) => {
                warn!(%error, "ignoring unreadable session token");
                None
            }
        };

        Self {
            token: Some(token),
            user,
        }
    }

    /// Replace the session with a fresh login.
    pub fn sign_in(&mut self, response: LoginResponse) {
        self.token = Some(response.token);
        self.user = Some(response.user);
    }

    /// Forget the token and the user.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// The signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginRequired`] when nobody is signed in.
    pub fn require_user(&self) -> Result<&SessionUser, SessionError> {
        self.user.as_ref().ok_or(SessionError::LoginRequired)
    }

    /// The signed-in user, who must be an admin.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::LoginRequired`] when nobody is signed in and
    /// [`SessionError::Forbidden`] for non-admin users.
    pub fn require_admin(&self) -> Result<&SessionUser, SessionError> {
        let user = self.require_user()?;

        if user.is_admin() {
            Ok(user)
        } else {
            Err(SessionError::Forbidden)
        }
    }
}

/// Read the `id` and `role` claims out of a JWT without verifying it.
///
/// # Errors
///
/// Returns an error if the token has no payload segment, the payload is not
/// base64url, or the claims lack an `id`.
pub fn decode_token(token: &str) -> Result<SessionUser, SessionError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or(SessionError::MalformedToken)?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(SessionError::TokenEncoding)?;

    serde_json::from_slice(&bytes).map_err(SessionError::TokenClaims)
}
