//! # Persisted session slot
//!
//! A [`SessionSlot`] is a small synchronous key/value store scoped to the
//! browsing session. On the web it is backed by `window.sessionStorage`
//! ([`crate::BrowserSessionSlot`]), so anything written here survives a reload
//! of the same tab and disappears when the tab closes. Native builds and tests
//! use [`crate::MemorySlot`].
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ACCESS_TOKEN_KEY`] | raw bearer token of the current session |
//! | [`USER_KEY`] | raw user identifier of the current session |
//!
//! Other keys may be used by the auth provider client to keep its own state.
//!
//! ## Error handling
//!
//! Implementations swallow storage errors: a read that fails returns `None`, a
//! failed write is dropped. The slot is a convenience mirror; the in-memory
//! session is always authoritative.

/// Key holding the access token mirror.
pub const ACCESS_TOKEN_KEY: &str = "sb-access-token";

/// Key holding the user identifier mirror.
pub const USER_KEY: &str = "sb-user";

/// Session-scoped key/value storage.
pub trait SessionSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: SessionSlot + ?Sized> SessionSlot for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
