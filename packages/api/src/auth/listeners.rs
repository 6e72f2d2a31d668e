//! Listener registry with cancellable subscriptions.
//!
//! [`Listeners`] keeps an ordered list of callbacks. [`Listeners::subscribe`]
//! hands back a [`Subscription`]; dropping it (or calling
//! [`Subscription::unsubscribe`]) removes the callback. The registry is
//! single-threaded, matching the UI event loop it serves.
//!
//! [`Listeners::emit`] snapshots the callback list before invoking it, so a
//! callback may subscribe, unsubscribe or emit again without tripping a
//! `RefCell` borrow.

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    entries: Vec<(u64, Callback<T>)>,
}

/// Ordered set of callbacks receiving `&T`.
pub struct Listeners<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T: 'static> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Rc::new(callback)));
            id
        };

        let weak = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = weak.upgrade() {
                registry.borrow_mut().entries.retain(|(entry, _)| *entry != id);
            }
        })
    }

    /// Invoke every registered callback in subscription order.
    pub fn emit(&self, value: &T) {
        let callbacks: Vec<Callback<T>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every callback. Outstanding subscriptions become no-ops.
    pub fn clear(&self) {
        self.registry.borrow_mut().entries.clear();
    }
}

/// Handle to a registered listener.
#[must_use = "dropping a Subscription unregisters the listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister the listener now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_emit_reaches_all_listeners_in_order() {
        let listeners = Listeners::<u32>::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let a = {
            let seen = seen.clone();
            listeners.subscribe(move |v| seen.borrow_mut().push(("a", *v)))
        };
        let b = {
            let seen = seen.clone();
            listeners.subscribe(move |v| seen.borrow_mut().push(("b", *v)))
        };

        listeners.emit(&7);
        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
        assert_eq!(listeners.len(), 2);

        drop(a);
        drop(b);
    }

    #[test]
    fn test_unsubscribe_and_drop_remove_listener() {
        let listeners = Listeners::<()>::new();
        let hits = Rc::new(Cell::new(0));

        let first = {
            let hits = hits.clone();
            listeners.subscribe(move |_| hits.set(hits.get() + 1))
        };
        let second = {
            let hits = hits.clone();
            listeners.subscribe(move |_| hits.set(hits.get() + 10))
        };

        first.unsubscribe();
        listeners.emit(&());
        assert_eq!(hits.get(), 10);

        drop(second);
        listeners.emit(&());
        assert_eq!(hits.get(), 10);
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_listener_may_unsubscribe_during_emit() {
        let listeners = Listeners::<()>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let hits = Rc::new(Cell::new(0));

        let subscription = {
            let slot = slot.clone();
            let hits = hits.clone();
            listeners.subscribe(move |_| {
                hits.set(hits.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        listeners.emit(&());
        listeners.emit(&());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_subscription_outlives_registry() {
        let listeners = Listeners::<()>::new();
        let subscription = listeners.subscribe(|_| {});
        drop(listeners);
        // Registry is gone; cancelling must not panic
        subscription.unsubscribe();
    }
}
