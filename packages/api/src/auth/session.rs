//! Session data types.

use serde::{Deserialize, Serialize};

/// Authenticated identity issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which the access token is stale.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
            refresh_token: None,
            expires_at: None,
        }
    }

    /// Both the token and the user identifier are present.
    pub fn is_usable(&self) -> bool {
        !self.access_token.is_empty() && !self.user_id.is_empty()
    }

    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Kind of auth state change pushed by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

/// A single auth state change: the event and the session that came with it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthChange {
    pub event: AuthEvent,
    pub session: Option<Session>,
}

impl AuthChange {
    pub fn new(event: AuthEvent, session: Option<Session>) -> Self {
        Self { event, session }
    }
}

/// Result of a successful sign-up call.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// The account exists but the email address must be confirmed first.
    PendingConfirmation { email: String },
    /// The provider confirmed the account immediately and signed the user in.
    SignedIn(Session),
}
