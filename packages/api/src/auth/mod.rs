//! Authentication provider boundary.
//!
//! The client never issues or verifies tokens itself. Everything goes through
//! an [`AuthProvider`]; the production implementation is [`GoTrueAuth`], a thin
//! REST client for a Supabase-compatible auth service.

use std::future::Future;

mod credentials;
mod gotrue;
mod listeners;
mod session;

pub use credentials::{Credentials, CredentialsError, MIN_PASSWORD_LEN};
pub use gotrue::GoTrueAuth;
pub use listeners::{Listeners, Subscription};
pub use session::{AuthChange, AuthEvent, Session, SignUpOutcome};

/// Errors reported by the auth provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Auth provider error ({status}): {message}")]
    Provider { status: u16, message: String },
    #[error("Malformed auth response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AuthError::Decode(e.to_string())
        } else {
            AuthError::Network(e.to_string())
        }
    }
}

/// Operations the client consumes from the external auth provider.
pub trait AuthProvider {
    /// Recover the session the provider currently holds, if any.
    fn get_current_session(&self) -> impl Future<Output = Result<Option<Session>, AuthError>>;

    fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, AuthError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<SignUpOutcome, AuthError>>;

    fn sign_out(&self) -> impl Future<Output = Result<(), AuthError>>;

    /// Register a listener for sign-in, sign-out and token-refresh events.
    /// The listener stays registered until the returned handle is dropped or
    /// unsubscribed.
    fn on_auth_state_change(&self, listener: impl Fn(&AuthChange) + 'static) -> Subscription;
}
