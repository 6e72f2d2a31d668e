//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`AppSessionStore`] of the app. It registers
//! for provider events, runs the bootstrap, and mirrors every store change
//! into a `Signal<SessionSnapshot>` so views re-render on sign-in and
//! sign-out. It also keeps the provider's token fresh. The store is disposed
//! when the provider unmounts.

use std::rc::Rc;

use api::{ApiError, SessionSnapshot, TripsClient};
use dioxus::prelude::*;
use store::AppConfig;

use crate::platform::{self, make_session_store, AppSessionStore};

/// Current session snapshot. Updates when the user signs in or out.
pub fn use_auth() -> Signal<SessionSnapshot> {
    use_context::<Signal<SessionSnapshot>>()
}

/// The shared session store, for sign-in, sign-up and logout.
pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Factory for backend clients bound to the session current at call time.
///
/// Fails with [`ApiError::NotAuthenticated`] while the store is initializing
/// or nobody is signed in.
pub fn use_trips_client() -> impl Fn() -> Result<TripsClient, ApiError> + Clone + 'static {
    let config = use_app_config();
    let auth = use_auth();
    move || TripsClient::from_snapshot(&config.api, &auth.read())
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_context_provider(AppConfig::from_build_env);
    let session_store = use_context_provider(|| make_session_store(&config));
    let snapshot = use_context_provider(|| Signal::new(session_store.snapshot()));

    // Watch first, so the bootstrap result and early events both land in the signal
    let _watch = use_hook(|| {
        let subscription = session_store.watch(move |next| {
            let mut snapshot = snapshot;
            snapshot.set(next.clone());
        });
        session_store.subscribe_to_auth_events();
        Rc::new(subscription)
    });

    let bootstrap_store = session_store.clone();
    use_future(move || {
        let session_store = bootstrap_store.clone();
        async move { session_store.bootstrap().await }
    });

    let refresh_store = session_store.clone();
    use_future(move || {
        let session_store = refresh_store.clone();
        async move { session_store.provider().keep_alive(platform::sleep).await }
    });

    use_drop(move || session_store.dispose());

    rsx! {
        {children}
    }
}

/// Button to log out the current user. The local session is cleared even
/// when the provider call fails.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session_store = use_session_store();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let session_store = session_store.clone();
        async move {
            pending.set(true);
            // Failures are logged by the store
            let _ = session_store.logout().await;
            pending.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "{label}"
        }
    }
}
