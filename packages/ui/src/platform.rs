//! Platform wiring for the session store.
//!
//! - **Web** (WASM + `web` feature): `window.sessionStorage` via [`store::BrowserSessionSlot`]
//! - **Everything else** (native builds, tests): in-memory [`store::MemorySlot`]

use std::time::Duration;

use api::auth::GoTrueAuth;
use api::SessionStore;
use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformSlot = store::BrowserSessionSlot;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformSlot = store::MemorySlot;

/// The session store every view shares.
pub type AppSessionStore = SessionStore<GoTrueAuth<PlatformSlot>, PlatformSlot>;

/// Create the platform-appropriate session store for `config`.
pub fn make_session_store(config: &AppConfig) -> AppSessionStore {
    let slot = PlatformSlot::new();
    let provider = GoTrueAuth::new(&config.auth, slot.clone());
    SessionStore::new(provider, slot)
}

/// Timer that works on both the browser event loop and a tokio runtime.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
