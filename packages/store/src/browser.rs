//! # `sessionStorage` slot
//!
//! [`BrowserSessionSlot`] is the [`SessionSlot`] used on the **web platform**.
//! It reads and writes `window.sessionStorage` through `web-sys`, so values
//! live exactly as long as the browser tab.
//!
//! The storage handle is looked up on every call.
//!
//! Errors (storage disabled, quota exceeded, private mode) are logged at
//! `debug` and otherwise ignored.

use crate::slot::SessionSlot;
use web_sys::Storage;

/// `window.sessionStorage`-backed slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionSlot;

impl BrowserSessionSlot {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl SessionSlot for BrowserSessionSlot {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::debug!("sessionStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::debug!("sessionStorage remove failed for {key}");
        }
    }
}
