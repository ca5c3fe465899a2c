use crate::vertical::Vertical;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

type Callback = Box<dyn Fn(Vertical) + Send + Sync>;

/// Single-writer observable holding the preview vertical selection.
///
/// Consumers subscribe explicitly and are notified synchronously on
/// every selection change, so all content resolution re-runs at once.
/// Dropping the [`Subscription`] unsubscribes. The initial selection is
/// the deployed vertical, which means resolution starts in the
/// deployed (no-override) state.
#[derive(Clone)]
pub struct PreviewStore {
    inner: Arc<Inner>,
}

struct Inner {
    deployed: Vertical,
    selected: RwLock<Vertical>,
    subscribers: Mutex<Vec<(u64, Callback)>>,
    next_id: AtomicU64,
}

/// Handle for one subscriber; unsubscribes on drop
pub struct Subscription {
    store: Weak<Inner>,
    id: u64,
}

impl PreviewStore {
    pub fn new(deployed: Vertical) -> Self {
        PreviewStore {
            inner: Arc::new(Inner {
                deployed,
                selected: RwLock::new(deployed),
                subscribers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// The vertical the tenant actually deployed with
    pub fn deployed(&self) -> Vertical {
        self.inner.deployed
    }

    /// The vertical currently selected for preview
    pub fn selected(&self) -> Vertical {
        *self.inner.selected.read().unwrap_or_else(|e| e.into_inner())
    }

    /// True when no override applies (selection matches deployment)
    pub fn is_deployed(&self) -> bool {
        self.selected() == self.inner.deployed
    }

    /// Change the preview selection and notify subscribers.
    ///
    /// Selecting the already-selected vertical is a no-op; transitions
    /// happen only on actual changes.
    pub fn select(&self, vertical: Vertical) {
        {
            let mut selected = self
                .inner
                .selected
                .write()
                .unwrap_or_else(|e| e.into_inner());
            if *selected == vertical {
                return;
            }
            *selected = vertical;
        }

        let subscribers = self
            .inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        for (_, callback) in subscribers.iter() {
            callback(vertical);
        }
    }

    /// Return to the deployed vertical (exit preview mode)
    pub fn reset(&self) {
        self.select(self.inner.deployed);
    }

    /// Register a change callback. Callbacks run synchronously on the
    /// selecting thread and must not subscribe or unsubscribe from
    /// inside the callback.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Vertical) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((id, Box::new(callback)));
        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut subscribers = inner.subscribers.lock().unwrap_or_else(|e| e.into_inner());
            subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_initial_state_is_deployed() {
        let store = PreviewStore::new(Vertical::Hvac);
        assert_eq!(store.selected(), Vertical::Hvac);
        assert!(store.is_deployed());
    }

    #[test]
    fn test_select_changes_state_and_notifies() {
        let store = PreviewStore::new(Vertical::Hvac);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let _sub = store.subscribe(move |v| {
            seen_clone.lock().unwrap().push(v);
        });

        store.select(Vertical::Plumbing);
        assert_eq!(store.selected(), Vertical::Plumbing);
        assert!(!store.is_deployed());
        assert_eq!(*seen.lock().unwrap(), vec![Vertical::Plumbing]);
    }

    #[test]
    fn test_selecting_current_vertical_does_not_notify() {
        let store = PreviewStore::new(Vertical::Hvac);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let _sub = store.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.select(Vertical::Hvac);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        store.select(Vertical::Roofing);
        store.select(Vertical::Roofing);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let store = PreviewStore::new(Vertical::Hvac);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let sub = store.subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.select(Vertical::Cleaning);
        drop(sub);
        store.select(Vertical::Electrical);

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reset_returns_to_deployed() {
        let store = PreviewStore::new(Vertical::Landscaping);
        store.select(Vertical::Plumbing);
        store.reset();
        assert!(store.is_deployed());
        assert_eq!(store.selected(), Vertical::Landscaping);
    }

    #[test]
    fn test_store_clones_share_state() {
        let store = PreviewStore::new(Vertical::Hvac);
        let other = store.clone();
        other.select(Vertical::Roofing);
        assert_eq!(store.selected(), Vertical::Roofing);
    }
}
