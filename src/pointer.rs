//! Pointer-down listeners.
//!
//! The hub plays the role of the document: every left mouse press is
//! dispatched to all registered listeners. Registration hands back a
//! `ListenerGuard`; dropping the guard removes the listener, so a widget that
//! stores its guard deregisters on every path that drops it.

use parking_lot::Mutex;
use ratatui::layout::Position;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

type Listener = Box<dyn FnMut(Position) + Send>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: HashMap<u64, Listener>,
}

/// Shared dispatcher for pointer-down events
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Arc<Mutex<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for pointer-down events.
    ///
    /// The listener stays registered for as long as the returned guard lives.
    /// Listeners run with the hub locked and must not register or drop guards.
    #[must_use = "dropping the guard removes the listener immediately"]
    pub fn register<F>(&self, listener: F) -> ListenerGuard
    where
        F: FnMut(Position) + Send + 'static,
    {
        let mut registry = self.registry.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));
        tracing::trace!("Registered pointer listener {}", id);

        ListenerGuard {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer-down at `position` to every listener
    pub fn dispatch(&self, position: Position) {
        let mut registry = self.registry.lock();
        for listener in registry.listeners.values_mut() {
            listener(position);
        }
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.registry.lock().listeners.len()
    }
}

/// Keeps a listener registered; removes it on drop.
pub struct ListenerGuard {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Hub already gone: nothing left to deregister from
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.lock().listeners.remove(&self.id);
        tracing::trace!("Removed pointer listener {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dispatch_reaches_listener() {
        let hub = PointerHub::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let _guard = hub.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        hub.dispatch(Position::new(1, 1));
        hub.dispatch(Position::new(2, 2));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_guard_removes_listener() {
        let hub = PointerHub::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let guard = hub.register(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(hub.listener_count(), 1);

        drop(guard);
        assert_eq!(hub.listener_count(), 0);
        hub.dispatch(Position::new(0, 0));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_repeated_mount_cycles_do_not_leak() {
        let hub = PointerHub::new();
        for _ in 0..50 {
            let _guard = hub.register(|_| {});
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_guard_outlives_hub() {
        let hub = PointerHub::new();
        let guard = hub.register(|_| {});
        drop(hub);
        // Must not panic
        drop(guard);
    }

    #[test]
    fn test_unwinding_removes_listener() {
        let hub = PointerHub::new();
        let inner = hub.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = inner.register(|_| {});
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(hub.listener_count(), 0);
    }
}
