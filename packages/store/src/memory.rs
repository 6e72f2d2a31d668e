use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::slot::SessionSlot;

/// In-memory SessionSlot for testing and native fallback.
///
/// Clones share the same entries, so a test can hand one clone to the code
/// under test and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{ACCESS_TOKEN_KEY, USER_KEY};

    #[test]
    fn test_set_and_get() {
        let slot = MemorySlot::new();
        assert!(slot.is_empty());

        slot.set(ACCESS_TOKEN_KEY, "t1");
        slot.set(USER_KEY, "u1");

        assert_eq!(slot.get(ACCESS_TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(slot.get(USER_KEY).as_deref(), Some("u1"));
        assert!(slot.get("missing").is_none());
    }

    #[test]
    fn test_overwrite_and_remove() {
        let slot = MemorySlot::new();
        slot.set(ACCESS_TOKEN_KEY, "old");
        slot.set(ACCESS_TOKEN_KEY, "new");
        assert_eq!(slot.get(ACCESS_TOKEN_KEY).as_deref(), Some("new"));

        slot.remove(ACCESS_TOKEN_KEY);
        assert!(slot.get(ACCESS_TOKEN_KEY).is_none());

        // Removing a missing key is a no-op
        slot.remove(USER_KEY);
        assert!(slot.is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let slot = MemorySlot::new();
        let observer = slot.clone();

        slot.set(USER_KEY, "u1");
        assert_eq!(observer.get(USER_KEY).as_deref(), Some("u1"));
    }
}
