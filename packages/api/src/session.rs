//! # Session store: single source of truth for "who is signed in"
//!
//! [`SessionStore`] holds the current access token and user identifier, mirrors
//! them into a [`SessionSlot`], and keeps them in sync with an
//! [`AuthProvider`]'s event stream.
//!
//! ## Lifecycle
//!
//! ```text
//! new ──► bootstrap ──► subscribe_to_auth_events ──► … ──► dispose
//! ```
//!
//! - [`bootstrap`](SessionStore::bootstrap) asks the provider for an existing
//!   session exactly once and flips `ready` when it returns, whatever the
//!   outcome. Errors count as "no session".
//! - [`subscribe_to_auth_events`](SessionStore::subscribe_to_auth_events)
//!   registers the provider listener. After bootstrap it is the only way the
//!   session changes, apart from [`logout`](SessionStore::logout).
//! - [`dispose`](SessionStore::dispose) drops the provider subscription and all
//!   watchers.
//!
//! Bootstrap and the first provider event are not sequenced: whichever update
//! lands last wins.
//!
//! ## Phases
//!
//! | Phase | `ready` | token + user |
//! |-------|---------|--------------|
//! | [`Initializing`](SessionPhase::Initializing) | `false` | anything |
//! | [`Authenticated`](SessionPhase::Authenticated) | `true` | both set |
//! | [`Unauthenticated`](SessionPhase::Unauthenticated) | `true` | both cleared |
//!
//! Token and user are always written together, and watchers registered with
//! [`watch`](SessionStore::watch) are notified only after the whole snapshot
//! has been updated.

use std::cell::RefCell;
use std::rc::Rc;

use store::{SessionSlot, ACCESS_TOKEN_KEY, USER_KEY};

use crate::auth::{AuthChange, AuthError, AuthEvent, AuthProvider, Listeners, Session, Subscription};

/// Read-only view of the store at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user_id: Option<String>,
    /// Bootstrap has completed.
    pub ready: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Initializing,
    Authenticated,
    Unauthenticated,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        matches!(
            (&self.token, &self.user_id),
            (Some(token), Some(user)) if !token.is_empty() && !user.is_empty()
        )
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.ready {
            SessionPhase::Initializing
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    /// Token to send as `Authorization: Bearer`, only once bootstrap is done.
    pub fn bearer(&self) -> Option<&str> {
        match self.phase() {
            SessionPhase::Authenticated => self.token.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The local session was cleared but the provider call failed.
    #[error("Remote sign-out failed: {0}")]
    SignOutFailed(#[source] AuthError),
}

struct Inner<P, S> {
    provider: P,
    slot: S,
    state: RefCell<SessionSnapshot>,
    watchers: Listeners<SessionSnapshot>,
    auth_subscription: RefCell<Option<Subscription>>,
}

impl<P, S: SessionSlot> Inner<P, S> {
    /// Write token and user together, persist them, then notify watchers.
    fn commit(&self, session: Option<&Session>, mark_ready: bool) {
        let (changed, snapshot) = {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            state.token = session.map(|s| s.access_token.clone());
            state.user_id = session.map(|s| s.user_id.clone());
            if mark_ready {
                state.ready = true;
            }
            (*state != before, state.clone())
        };

        match session {
            Some(session) => {
                self.slot.set(ACCESS_TOKEN_KEY, &session.access_token);
                self.slot.set(USER_KEY, &session.user_id);
            }
            None => {
                self.slot.remove(ACCESS_TOKEN_KEY);
                self.slot.remove(USER_KEY);
            }
        }

        if changed {
            tracing::debug!(phase = ?snapshot.phase(), "session updated");
            self.watchers.emit(&snapshot);
        }
    }

    fn handle_auth_change(&self, change: &AuthChange) {
        match (&change.event, &change.session) {
            (AuthEvent::SignedOut, _) => self.commit(None, false),
            (_, Some(session)) if session.is_usable() => self.commit(Some(session), false),
            (event, _) => {
                tracing::debug!(?event, "auth event without usable session");
                self.commit(None, false);
            }
        }
    }
}

/// Session state shared across the view tree. Clones share the same state.
pub struct SessionStore<P, S> {
    inner: Rc<Inner<P, S>>,
}

impl<P, S> Clone for SessionStore<P, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<P, S> PartialEq for SessionStore<P, S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<P, S> SessionStore<P, S>
where
    P: AuthProvider + 'static,
    S: SessionSlot + 'static,
{
    pub fn new(provider: P, slot: S) -> Self {
        Self {
            inner: Rc::new(Inner {
                provider,
                slot,
                state: RefCell::new(SessionSnapshot::default()),
                watchers: Listeners::new(),
                auth_subscription: RefCell::new(None),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.state.borrow().ready
    }

    /// The auth provider, for sign-in and sign-up. Their results reach the
    /// store through the provider's event stream.
    pub fn provider(&self) -> &P {
        &self.inner.provider
    }

    /// Call `f` after every change to the snapshot.
    pub fn watch(&self, f: impl Fn(&SessionSnapshot) + 'static) -> Subscription {
        self.inner.watchers.subscribe(f)
    }

    /// Recover an existing session from the provider. Runs once; later calls
    /// are ignored.
    pub async fn bootstrap(&self) {
        if self.is_ready() {
            tracing::debug!("bootstrap already completed");
            return;
        }

        match self.inner.provider.get_current_session().await {
            Ok(Some(session)) if session.is_usable() => {
                tracing::debug!(user = %session.user_id, "restored session");
                self.inner.commit(Some(&session), true);
            }
            Ok(_) => {
                tracing::debug!("no existing session");
                self.inner.commit(None, true);
            }
            Err(e) => {
                tracing::warn!("session bootstrap failed: {e}");
                self.inner.commit(None, true);
            }
        }
    }

    /// Register the provider listener. Calling it again is a no-op.
    pub fn subscribe_to_auth_events(&self) {
        if self.is_subscribed() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let subscription = self.inner.provider.on_auth_state_change(move |change| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_auth_change(change);
            }
        });
        *self.inner.auth_subscription.borrow_mut() = Some(subscription);
    }

    pub fn is_subscribed(&self) -> bool {
        self.inner.auth_subscription.borrow().is_some()
    }

    /// Sign out remotely and clear the local session. The local clear always
    /// happens; the result reports only the remote call.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let remote = self.inner.provider.sign_out().await;
        self.inner.commit(None, false);
        remote.map_err(|e| {
            tracing::error!("logout error: {e}");
            SessionError::SignOutFailed(e)
        })
    }

    /// Drop the provider subscription and every watcher.
    pub fn dispose(&self) {
        let subscription = self.inner.auth_subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
        self.inner.watchers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SignUpOutcome;
    use futures::channel::oneshot;
    use std::cell::Cell;
    use store::MemorySlot;

    /// Scripted auth provider.
    #[derive(Default)]
    struct FakeAuth {
        current: RefCell<Option<Result<Option<Session>, AuthError>>>,
        gate: RefCell<Option<oneshot::Receiver<Result<Option<Session>, AuthError>>>>,
        sign_out_error: RefCell<Option<AuthError>>,
        sign_out_calls: Cell<u32>,
        listeners: Listeners<AuthChange>,
    }

    impl FakeAuth {
        fn with_session(session: Option<Session>) -> Self {
            let fake = Self::default();
            *fake.current.borrow_mut() = Some(Ok(session));
            fake
        }

        fn failing(error: AuthError) -> Self {
            let fake = Self::default();
            *fake.current.borrow_mut() = Some(Err(error));
            fake
        }

        /// Bootstrap blocks until the returned sender fires.
        fn gated() -> (Self, oneshot::Sender<Result<Option<Session>, AuthError>>) {
            let (tx, rx) = oneshot::channel();
            let fake = Self::default();
            *fake.gate.borrow_mut() = Some(rx);
            (fake, tx)
        }

        fn emit(&self, event: AuthEvent, session: Option<Session>) {
            self.listeners.emit(&AuthChange::new(event, session));
        }
    }

    impl AuthProvider for FakeAuth {
        async fn get_current_session(&self) -> Result<Option<Session>, AuthError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                return gate
                    .await
                    .unwrap_or_else(|_| Err(AuthError::Network("gate dropped".to_string())));
            }
            self.current.borrow_mut().take().unwrap_or(Ok(None))
        }

        async fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<Session, AuthError> {
            Err(AuthError::InvalidCredentials)
        }

        async fn sign_up(&self, email: &str, _password: &str) -> Result<SignUpOutcome, AuthError> {
            Ok(SignUpOutcome::PendingConfirmation {
                email: email.to_string(),
            })
        }

        async fn sign_out(&self) -> Result<(), AuthError> {
            self.sign_out_calls.set(self.sign_out_calls.get() + 1);
            match self.sign_out_error.borrow_mut().take() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        fn on_auth_state_change(&self, listener: impl Fn(&AuthChange) + 'static) -> Subscription {
            self.listeners.subscribe(listener)
        }
    }

    fn session(token: &str, user: &str) -> Session {
        Session::new(token, user)
    }

    fn store_with(fake: FakeAuth) -> (SessionStore<FakeAuth, MemorySlot>, MemorySlot) {
        let slot = MemorySlot::new();
        (SessionStore::new(fake, slot.clone()), slot)
    }

    fn reads(store: &SessionStore<FakeAuth, MemorySlot>) -> (Option<String>, Option<String>, bool) {
        let s = store.snapshot();
        (s.token, s.user_id, s.ready)
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_new_store_is_initializing() {
        let (store, slot) = store_with(FakeAuth::default());
        assert_eq!(store.snapshot().phase(), SessionPhase::Initializing);
        assert!(store.snapshot().bearer().is_none());
        assert!(slot.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_with_session() {
        let (store, slot) = store_with(FakeAuth::with_session(Some(session("t1", "u1"))));
        store.bootstrap().await;

        assert_eq!(reads(&store), (some("t1"), some("u1"), true));
        assert_eq!(store.snapshot().phase(), SessionPhase::Authenticated);
        assert_eq!(store.snapshot().bearer(), Some("t1"));
        assert_eq!(slot.get(ACCESS_TOKEN_KEY), some("t1"));
        assert_eq!(slot.get(USER_KEY), some("u1"));
    }

    #[tokio::test]
    async fn test_bootstrap_without_session() {
        let (store, slot) = store_with(FakeAuth::with_session(None));
        store.bootstrap().await;

        assert_eq!(reads(&store), (None, None, true));
        assert_eq!(store.snapshot().phase(), SessionPhase::Unauthenticated);
        assert!(slot.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_failure_is_unauthenticated() {
        let (store, slot) = store_with(FakeAuth::failing(AuthError::Network("offline".to_string())));
        slot.set(ACCESS_TOKEN_KEY, "stale");
        slot.set(USER_KEY, "stale");

        store.bootstrap().await;

        assert_eq!(reads(&store), (None, None, true));
        assert!(slot.is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_ignores_half_session() {
        let (store, _slot) = store_with(FakeAuth::with_session(Some(session("t1", ""))));
        store.bootstrap().await;
        assert_eq!(reads(&store), (None, None, true));
    }

    #[tokio::test]
    async fn test_bootstrap_runs_once() {
        let (store, _slot) = store_with(FakeAuth::with_session(Some(session("t1", "u1"))));
        store.bootstrap().await;
        store.subscribe_to_auth_events();
        store.provider().emit(AuthEvent::SignedOut, None);

        // A second bootstrap must not re-enter initializing or refetch
        store.bootstrap().await;
        assert_eq!(reads(&store), (None, None, true));
    }

    #[tokio::test]
    async fn test_last_event_wins() {
        let sequences: Vec<Vec<(AuthEvent, Option<Session>)>> = vec![
            vec![(AuthEvent::SignedIn, Some(session("a", "u1")))],
            vec![
                (AuthEvent::SignedIn, Some(session("a", "u1"))),
                (AuthEvent::SignedOut, None),
            ],
            vec![
                (AuthEvent::SignedOut, None),
                (AuthEvent::SignedIn, Some(session("b", "u2"))),
                (AuthEvent::TokenRefreshed, Some(session("c", "u2"))),
            ],
            vec![
                (AuthEvent::SignedIn, Some(session("a", "u1"))),
                (AuthEvent::TokenRefreshed, None),
            ],
            vec![
                (AuthEvent::UserUpdated, Some(session("d", "u3"))),
                (AuthEvent::SignedIn, Some(session("e", "u4"))),
            ],
        ];

        for bootstrap_first in [true, false] {
            for events in &sequences {
                let (store, slot) = store_with(FakeAuth::with_session(Some(session("boot", "u0"))));
                store.subscribe_to_auth_events();
                if bootstrap_first {
                    store.bootstrap().await;
                }
                for (event, s) in events {
                    store.provider().emit(*event, s.clone());
                }
                if !bootstrap_first {
                    // Bootstrap landing after the events wins instead
                    store.bootstrap().await;
                    assert_eq!(reads(&store), (some("boot"), some("u0"), true));
                    continue;
                }

                let expected = events
                    .last()
                    .and_then(|(event, s)| match event {
                        AuthEvent::SignedOut => None,
                        _ => s.clone(),
                    });
                let snapshot = store.snapshot();
                assert_eq!(snapshot.token, expected.as_ref().map(|s| s.access_token.clone()));
                assert_eq!(snapshot.user_id, expected.as_ref().map(|s| s.user_id.clone()));
                assert_eq!(slot.get(ACCESS_TOKEN_KEY), snapshot.token);
                assert_eq!(slot.get(USER_KEY), snapshot.user_id);
            }
        }
    }

    #[tokio::test]
    async fn test_event_during_pending_bootstrap_is_overwritten() {
        let (fake, release) = FakeAuth::gated();
        let (store, _slot) = store_with(fake);
        store.subscribe_to_auth_events();

        let events = async {
            store.provider().emit(AuthEvent::SignedIn, Some(session("event", "u2")));
            // Still initializing: events update fields but never flip ready
            assert_eq!(reads(&store), (some("event"), some("u2"), false));
            release.send(Ok(Some(session("boot", "u1")))).unwrap();
        };
        futures::join!(store.bootstrap(), events);

        assert_eq!(reads(&store), (some("boot"), some("u1"), true));
    }

    #[tokio::test]
    async fn test_signed_out_after_authenticated_bootstrap() {
        let (store, slot) = store_with(FakeAuth::with_session(Some(session("t1", "u1"))));
        store.bootstrap().await;
        store.subscribe_to_auth_events();
        assert_eq!(store.snapshot().phase(), SessionPhase::Authenticated);

        store.provider().emit(AuthEvent::SignedOut, None);

        assert_eq!(reads(&store), (None, None, true));
        assert_eq!(store.snapshot().phase(), SessionPhase::Unauthenticated);
        assert!(slot.is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_even_when_remote_fails() {
        let fake = FakeAuth::with_session(Some(session("t1", "u1")));
        *fake.sign_out_error.borrow_mut() = Some(AuthError::Network("offline".to_string()));
        let (store, slot) = store_with(fake);
        store.bootstrap().await;

        let result = store.logout().await;

        assert!(matches!(result, Err(SessionError::SignOutFailed(AuthError::Network(_)))));
        assert_eq!(reads(&store), (None, None, true));
        assert!(slot.is_empty());
        assert_eq!(store.provider().sign_out_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_logout_success() {
        let (store, slot) = store_with(FakeAuth::with_session(Some(session("t1", "u1"))));
        store.bootstrap().await;

        assert!(store.logout().await.is_ok());
        assert_eq!(reads(&store), (None, None, true));
        assert!(slot.is_empty());
    }

    #[tokio::test]
    async fn test_watchers_see_complete_snapshots() {
        let (store, _slot) = store_with(FakeAuth::with_session(Some(session("t1", "u1"))));
        store.subscribe_to_auth_events();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _watch = {
            let seen = seen.clone();
            let reader = store.clone();
            store.watch(move |snapshot| {
                // The store already reflects the notified snapshot
                assert_eq!(&reader.snapshot(), snapshot);
                seen.borrow_mut().push(snapshot.phase());
            })
        };

        store.bootstrap().await;
        store.provider().emit(AuthEvent::TokenRefreshed, Some(session("t2", "u1")));
        store.provider().emit(AuthEvent::SignedOut, None);
        // Unchanged state does not notify
        store.provider().emit(AuthEvent::SignedOut, None);

        assert_eq!(
            *seen.borrow(),
            vec![
                SessionPhase::Authenticated,
                SessionPhase::Authenticated,
                SessionPhase::Unauthenticated,
            ]
        );
    }

    #[tokio::test]
    async fn test_dispose_stops_updates() {
        let (store, _slot) = store_with(FakeAuth::with_session(None));
        store.bootstrap().await;
        store.subscribe_to_auth_events();
        assert!(store.is_subscribed());
        assert_eq!(store.provider().listeners.len(), 1);

        let hits = Rc::new(Cell::new(0));
        let _watch = {
            let hits = hits.clone();
            store.watch(move |_| hits.set(hits.get() + 1))
        };

        store.dispose();
        assert!(!store.is_subscribed());
        assert!(store.provider().listeners.is_empty());

        store.provider().emit(AuthEvent::SignedIn, Some(session("t1", "u1")));
        assert_eq!(reads(&store), (None, None, true));
        assert_eq!(hits.get(), 0);
    }

    #[tokio::test]
    async fn test_subscribe_twice_registers_once() {
        let (store, _slot) = store_with(FakeAuth::default());
        store.subscribe_to_auth_events();
        store.subscribe_to_auth_events();
        assert_eq!(store.provider().listeners.len(), 1);
    }

    #[test]
    fn test_snapshot_phases() {
        let mut snapshot = SessionSnapshot {
            token: some("t"),
            user_id: some("u"),
            ready: false,
        };
        assert_eq!(snapshot.phase(), SessionPhase::Initializing);
        assert!(snapshot.bearer().is_none());

        snapshot.ready = true;
        assert_eq!(snapshot.phase(), SessionPhase::Authenticated);

        snapshot.user_id = some("");
        assert_eq!(snapshot.phase(), SessionPhase::Unauthenticated);
    }
}
