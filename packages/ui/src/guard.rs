//! # Route guards
//!
//! Every view is wrapped by exactly one guard kind:
//!
//! | Kind | Renders when | Otherwise redirects to |
//! |------|--------------|------------------------|
//! | [`GuardKind::RequiresSession`] | authenticated | `/login` |
//! | [`GuardKind::RequiresNoSession`] | unauthenticated | `/` |
//!
//! Both show a neutral placeholder while the session store is still
//! initializing. The two kinds never render for the same snapshot, and each
//! redirect lands on a view of the other kind, so redirects cannot loop.
//!
//! [`evaluate`] is the whole decision; [`Guarded`] applies it and leaves the
//! actual navigation to the router-owning crate.

use api::{SessionPhase, SessionSnapshot};
use dioxus::prelude::*;

use crate::auth::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    RequiresSession,
    RequiresNoSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Home,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session state unknown yet.
    Pending,
    Render,
    Redirect(RedirectTarget),
}

pub fn evaluate(kind: GuardKind, snapshot: &SessionSnapshot) -> GuardOutcome {
    match (kind, snapshot.phase()) {
        (_, SessionPhase::Initializing) => GuardOutcome::Pending,
        (GuardKind::RequiresSession, SessionPhase::Authenticated) => GuardOutcome::Render,
        (GuardKind::RequiresSession, SessionPhase::Unauthenticated) => {
            GuardOutcome::Redirect(RedirectTarget::Login)
        }
        (GuardKind::RequiresNoSession, SessionPhase::Unauthenticated) => GuardOutcome::Render,
        (GuardKind::RequiresNoSession, SessionPhase::Authenticated) => {
            GuardOutcome::Redirect(RedirectTarget::Home)
        }
    }
}

/// Render `children` only when `kind` allows it for the current session.
///
/// `on_redirect` is called once each time the session settles into a state
/// the guard rejects.
#[component]
pub fn Guarded(kind: GuardKind, on_redirect: EventHandler<RedirectTarget>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if let GuardOutcome::Redirect(target) = evaluate(kind, &auth.read()) {
            tracing::debug!(?kind, to = target.path(), "guard redirect");
            on_redirect.call(target);
        }
    });

    let outcome = evaluate(kind, &auth.read());
    match outcome {
        GuardOutcome::Render => rsx! {
            {children}
        },
        GuardOutcome::Pending => rsx! {
            div { class: "guard-placeholder", "Loading..." }
        },
        GuardOutcome::Redirect(_) => rsx! {},
    }
}
