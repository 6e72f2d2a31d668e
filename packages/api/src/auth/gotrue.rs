//! # GoTrue (Supabase Auth) client
//!
//! [`GoTrueAuth`] implements [`AuthProvider`] against the `/auth/v1` REST API
//! of a Supabase-compatible auth service.
//!
//! ## Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`sign_in_with_password`](AuthProvider::sign_in_with_password) | `POST /auth/v1/token?grant_type=password` |
//! | [`refresh_session`](GoTrueAuth::refresh_session) | `POST /auth/v1/token?grant_type=refresh_token` |
//! | [`sign_up`](AuthProvider::sign_up) | `POST /auth/v1/signup` |
//! | [`get_current_session`](AuthProvider::get_current_session) | `GET /auth/v1/user` with the stored token |
//! | [`sign_out`](AuthProvider::sign_out) | `POST /auth/v1/logout` |
//!
//! Every request carries the project's public key in the `apikey` header.
//!
//! ## Local state
//!
//! The current session is kept in memory and serialised as JSON into the
//! [`SessionSlot`] under [`PROVIDER_SESSION_KEY`], which is how a reloaded tab
//! recovers it. `get_current_session` validates the stored token with the
//! service (refreshing it first when it has expired) before handing it out.
//!
//! ## Events
//!
//! Successful sign-in emits `SignedIn`, refresh emits `TokenRefreshed`, and
//! sign-out emits `SignedOut` with no session.
//!
//! ## Keeping the session alive
//!
//! [`keep_alive`](GoTrueAuth::keep_alive) runs for the lifetime of the app and
//! refreshes the access token [`REFRESH_MARGIN_SECS`] before it expires. A
//! session that can no longer be refreshed is dropped with `SignedOut`.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use store::config::AuthConfig;
use store::SessionSlot;

use super::{
    AuthChange, AuthError, AuthEvent, AuthProvider, Listeners, Session, SignUpOutcome,
    Subscription,
};

/// Slot key under which the provider keeps its own session.
pub const PROVIDER_SESSION_KEY: &str = "sb-auth-session";

/// How long before expiry the access token is refreshed.
pub const REFRESH_MARGIN_SECS: i64 = 60;

/// Longest single wait of the keep-alive loop.
const MAX_WAIT: Duration = Duration::from_secs(30);
const RETRY_DELAY: Duration = Duration::from_secs(10);

/// Token grant response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: UserResponse,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

/// Sign-up returns either a full token response (auto-confirmed projects) or
/// just the user record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(UserResponse),
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Auth provider backed by a GoTrue service.
pub struct GoTrueAuth<S> {
    http: Client,
    url: String,
    anon_key: String,
    slot: S,
    current: RefCell<Option<Session>>,
    listeners: Listeners<AuthChange>,
}

impl<S: SessionSlot> GoTrueAuth<S> {
    pub fn new(config: &AuthConfig, slot: S) -> Self {
        let current = slot
            .get(PROVIDER_SESSION_KEY)
            .and_then(|raw| serde_json::from_str::<Session>(&raw).ok())
            .filter(Session::is_usable);
        Self {
            http: Client::new(),
            url: config.url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            slot,
            current: RefCell::new(current),
            listeners: Listeners::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }

    fn store_session(&self, session: Option<&Session>) {
        match session.and_then(|s| serde_json::to_string(s).ok()) {
            Some(raw) => self.slot.set(PROVIDER_SESSION_KEY, &raw),
            None => self.slot.remove(PROVIDER_SESSION_KEY),
        }
        *self.current.borrow_mut() = session.cloned();
    }

    fn emit(&self, event: AuthEvent, session: Option<Session>) {
        tracing::debug!(?event, "auth state change");
        self.listeners.emit(&AuthChange::new(event, session));
    }

    /// Seconds until the current session is due for refresh, `None` when there
    /// is no session or it never expires.
    fn refresh_due_in(&self, now: i64) -> Option<i64> {
        let expires_at = self.current.borrow().as_ref()?.expires_at?;
        Some((expires_at - REFRESH_MARGIN_SECS - now).max(0))
    }

    /// Refresh the session ahead of expiry, forever.
    ///
    /// `sleep` is the platform timer. Sign-in and sign-out during a wait are
    /// picked up on the next wake-up.
    pub async fn keep_alive<F, Fut>(&self, sleep: F)
    where
        F: Fn(Duration) -> Fut,
        Fut: Future<Output = ()>,
    {
        loop {
            let due_in = match self.refresh_due_in(now()) {
                Some(secs) => secs,
                None => {
                    sleep(MAX_WAIT).await;
                    continue;
                }
            };
            if due_in > 0 {
                sleep(Duration::from_secs(due_in.unsigned_abs()).min(MAX_WAIT)).await;
                continue;
            }

            match self.refresh_session().await {
                Ok(Some(_)) => {}
                Ok(None) => {
                    if self.current.borrow().is_some() {
                        tracing::debug!("session expired without a refresh token");
                        self.store_session(None);
                        self.emit(AuthEvent::SignedOut, None);
                    }
                }
                Err(e) => {
                    tracing::warn!("token refresh failed: {e}");
                    sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    /// Exchange the stored refresh token for a new access token.
    pub async fn refresh_session(&self) -> Result<Option<Session>, AuthError> {
        let refresh_token = self
            .current
            .borrow()
            .as_ref()
            .and_then(|s| s.refresh_token.clone());
        let Some(refresh_token) = refresh_token else {
            return Ok(None);
        };

        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        if matches!(response.status(), StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            // Refresh token revoked or already used
            self.store_session(None);
            self.emit(AuthEvent::SignedOut, None);
            return Ok(None);
        }
        let token: TokenResponse = check(response).await?.json().await?;
        let session = session_from_token(token, now());
        self.store_session(Some(&session));
        self.emit(AuthEvent::TokenRefreshed, Some(session.clone()));
        Ok(Some(session))
    }
}

impl<S: SessionSlot> AuthProvider for GoTrueAuth<S> {
    async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
        let stored = self.current.borrow().clone();
        let Some(mut session) = stored else {
            return Ok(None);
        };

        if session.is_expired_at(now()) {
            match self.refresh_session().await? {
                Some(refreshed) => session = refreshed,
                None => {
                    self.store_session(None);
                    return Ok(None);
                }
            }
        }

        let response = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;

        if matches!(response.status(), StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!("stored session rejected by auth provider");
            self.store_session(None);
            return Ok(None);
        }
        let user: UserResponse = check(response).await?.json().await?;
        session.user_id = user.id;
        self.store_session(Some(&session));
        Ok(Some(session))
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .http
            .post(self.endpoint("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let token: TokenResponse = check(response).await?.json().await?;
        let session = session_from_token(token, now());
        tracing::info!(user = %session.user_id, "signed in");
        self.store_session(Some(&session));
        self.emit(AuthEvent::SignedIn, Some(session.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, AuthError> {
        let response = self
            .http
            .post(self.endpoint("signup"))
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        match check(response).await?.json::<SignUpResponse>().await? {
            SignUpResponse::Session(token) => {
                let session = session_from_token(token, now());
                self.store_session(Some(&session));
                self.emit(AuthEvent::SignedIn, Some(session.clone()));
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse::User(user) => Ok(SignUpOutcome::PendingConfirmation {
                email: user.email.unwrap_or_else(|| email.to_string()),
            }),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.current.borrow().as_ref().map(|s| s.access_token.clone());

        let result = match token {
            Some(token) => {
                let sent = self
                    .http
                    .post(self.endpoint("logout"))
                    .header("apikey", &self.anon_key)
                    .bearer_auth(token)
                    .send()
                    .await;
                match sent {
                    // An already-invalid token means the session is gone remotely
                    Ok(r) if matches!(r.status(), StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND) => Ok(()),
                    Ok(r) => check(r).await.map(|_| ()),
                    Err(e) => Err(e.into()),
                }
            }
            None => Ok(()),
        };

        self.store_session(None);
        self.emit(AuthEvent::SignedOut, None);
        result
    }

    fn on_auth_state_change(&self, listener: impl Fn(&AuthChange) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }
}

/// Pass successful responses through, turn the rest into [`AuthError`].
async fn check(response: Response) -> Result<Response, AuthError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_error(status.as_u16(), &body))
}

fn classify_error(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    if parsed.error.as_deref() == Some("invalid_grant") {
        return AuthError::InvalidCredentials;
    }
    let message = parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| body.trim().to_string());
    if message.contains("Invalid login credentials") {
        return AuthError::InvalidCredentials;
    }
    AuthError::Provider { status, message }
}

fn session_from_token(token: TokenResponse, now: i64) -> Session {
    let expires_at = token
        .expires_at
        .or_else(|| token.expires_in.map(|secs| now + secs));
    Session {
        access_token: token.access_token,
        user_id: token.user.id,
        refresh_token: token.refresh_token,
        expires_at,
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemorySlot;

    #[test]
    fn test_session_from_token_computes_expiry() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"t1","token_type":"bearer","expires_in":3600,
                "refresh_token":"r1","user":{"id":"u1","email":"a@b.co"}}"#,
        )
        .unwrap();
        let session = session_from_token(token, 1_000);
        assert_eq!(session.access_token, "t1");
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.refresh_token.as_deref(), Some("r1"));
        assert_eq!(session.expires_at, Some(4_600));
    }

    #[test]
    fn test_explicit_expires_at_wins() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"t1","expires_in":3600,"expires_at":42,"user":{"id":"u1"}}"#,
        )
        .unwrap();
        assert_eq!(session_from_token(token, 1_000).expires_at, Some(42));
    }

    #[test]
    fn test_sign_up_response_shapes() {
        let pending: SignUpResponse =
            serde_json::from_str(r#"{"id":"u1","email":"a@b.co","confirmation_sent_at":"x"}"#).unwrap();
        assert!(matches!(pending, SignUpResponse::User(ref u) if u.id == "u1"));

        let confirmed: SignUpResponse =
            serde_json::from_str(r#"{"access_token":"t1","user":{"id":"u1"}}"#).unwrap();
        assert!(matches!(confirmed, SignUpResponse::Session(_)));
    }

    #[test]
    fn test_classify_error() {
        assert_eq!(
            classify_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            classify_error(400, r#"{"code":400,"msg":"Invalid login credentials"}"#),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            classify_error(422, r#"{"code":422,"msg":"User already registered"}"#),
            AuthError::Provider {
                status: 422,
                message: "User already registered".to_string()
            }
        );
        assert_eq!(
            classify_error(502, "Bad Gateway"),
            AuthError::Provider {
                status: 502,
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_restores_stored_session() {
        let slot = MemorySlot::new();
        let stored = Session::new("t1", "u1");
        slot.set(PROVIDER_SESSION_KEY, &serde_json::to_string(&stored).unwrap());

        let auth = GoTrueAuth::new(&AuthConfig::default(), slot.clone());
        assert_eq!(*auth.current.borrow(), Some(stored));

        // Garbage in the slot is ignored
        slot.set(PROVIDER_SESSION_KEY, "not json");
        let auth = GoTrueAuth::new(&AuthConfig::default(), slot);
        assert!(auth.current.borrow().is_none());
    }

    #[tokio::test]
    async fn test_sign_out_without_session_clears_and_notifies() {
        let slot = MemorySlot::new();
        let auth = GoTrueAuth::new(&AuthConfig::default(), slot.clone());
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            auth.on_auth_state_change(move |change| seen.borrow_mut().push(change.clone()))
        };

        assert!(auth.sign_out().await.is_ok());
        assert_eq!(*seen.borrow(), vec![AuthChange::new(AuthEvent::SignedOut, None)]);
        assert!(slot.get(PROVIDER_SESSION_KEY).is_none());
    }

    fn expired_session() -> Session {
        Session {
            expires_at: Some(1),
            ..Session::new("t1", "u1")
        }
    }

    #[test]
    fn test_refresh_due_in() {
        let slot = MemorySlot::new();
        let auth = GoTrueAuth::new(&AuthConfig::default(), slot);
        assert_eq!(auth.refresh_due_in(0), None);

        *auth.current.borrow_mut() = Some(Session::new("t1", "u1"));
        assert_eq!(auth.refresh_due_in(0), None);

        *auth.current.borrow_mut() = Some(Session {
            expires_at: Some(1_000),
            ..Session::new("t1", "u1")
        });
        assert_eq!(auth.refresh_due_in(900), Some(1_000 - REFRESH_MARGIN_SECS - 900));
        assert_eq!(auth.refresh_due_in(990), Some(0));
        assert_eq!(auth.refresh_due_in(5_000), Some(0));
    }

    #[tokio::test]
    async fn test_expired_session_without_refresh_token_is_cleared() {
        let slot = MemorySlot::new();
        slot.set(PROVIDER_SESSION_KEY, &serde_json::to_string(&expired_session()).unwrap());
        let auth = GoTrueAuth::new(&AuthConfig::default(), slot.clone());

        assert_eq!(auth.get_current_session().await, Ok(None));
        assert!(auth.current.borrow().is_none());
        assert!(slot.get(PROVIDER_SESSION_KEY).is_none());
    }

    #[test]
    fn test_keep_alive_signs_out_unrefreshable_session() {
        use futures::future::{self, FutureExt};

        let slot = MemorySlot::new();
        slot.set(PROVIDER_SESSION_KEY, &serde_json::to_string(&expired_session()).unwrap());
        let auth = GoTrueAuth::new(&AuthConfig::default(), slot.clone());
        let seen = std::rc::Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = seen.clone();
            auth.on_auth_state_change(move |change| seen.borrow_mut().push(change.clone()))
        };

        // The timer fires twice, then never again
        let waits = RefCell::new(Vec::new());
        let sleep = |d: Duration| {
            waits.borrow_mut().push(d);
            if waits.borrow().len() < 3 {
                future::ready(()).left_future()
            } else {
                future::pending().right_future()
            }
        };
        assert!(auth.keep_alive(sleep).now_or_never().is_none());

        assert_eq!(*seen.borrow(), vec![AuthChange::new(AuthEvent::SignedOut, None)]);
        assert!(slot.get(PROVIDER_SESSION_KEY).is_none());
        assert_eq!(*waits.borrow(), vec![MAX_WAIT; 3]);
    }

    #[tokio::test]
    async fn test_no_stored_session_skips_network() {
        let auth = GoTrueAuth::new(&AuthConfig::default(), MemorySlot::new());
        assert_eq!(auth.get_current_session().await, Ok(None));
    }
}
