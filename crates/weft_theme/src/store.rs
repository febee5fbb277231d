//! Active-theme cell with subscriber notification.
//!
//! A [`ThemeStore`] owns the registry and the single "current theme"
//! slot. Selection is the only mutation: themes themselves never change,
//! the slot just points at a different one.

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;
use crate::theme::Theme;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock, Weak};

/// Callback invoked with the active theme on subscribe and on every
/// switch.
pub type ThemeCallback = Arc<dyn Fn(&Theme) + Send + Sync>;

struct Subscriber {
    id: u64,
    callback: ThemeCallback,
}

struct StoreInner {
    registry: ThemeRegistry,
    active: RwLock<Arc<Theme>>,
    subscribers: Mutex<Vec<Subscriber>>,
    next_subscriber_id: AtomicU64,
}

/// The current theme plus everyone watching it.
///
/// Cheap to clone; all clones share one cell. [`select`] swaps the
/// active theme and synchronously notifies subscribers in registration
/// order before it returns.
///
/// [`select`]: ThemeStore::select
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

/// Handle returned by [`ThemeStore::subscribe`].
///
/// Dropping the handle keeps the subscription alive for the life of the
/// store; only [`unsubscribe`](Subscription::unsubscribe) removes it.
#[must_use = "hold the Subscription if the callback should ever be removed"]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Subscription {
    /// Permanently remove the subscribed callback.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            let mut subscribers = inner.subscribers.lock().unwrap();
            subscribers.retain(|subscriber| subscriber.id != self.id);
        }
    }
}

impl ThemeStore {
    /// Create a store over `registry`, starting on its default entry.
    ///
    /// Fails if the registry is empty.
    pub fn new(registry: ThemeRegistry) -> Result<Self, ThemeError> {
        let active = registry.default_entry()?;
        Ok(Self {
            inner: Arc::new(StoreInner {
                registry,
                active: RwLock::new(active),
                subscribers: Mutex::new(Vec::new()),
                next_subscriber_id: AtomicU64::new(0),
            }),
        })
    }

    /// Store over the built-in themes, starting on `default`.
    pub fn builtin() -> Self {
        Self::new(ThemeRegistry::builtin()).expect("built-in registry has a default entry")
    }

    /// The currently active theme.
    pub fn active(&self) -> Arc<Theme> {
        self.inner.active.read().unwrap().clone()
    }

    /// The registry this store selects from.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.inner.registry
    }

    /// Switch the active theme to the registered `name`.
    ///
    /// An unknown name fails without touching the active theme. On
    /// success every subscriber is invoked with the new theme, in
    /// registration order, before this returns.
    pub fn select(&self, name: &str) -> Result<(), ThemeError> {
        let theme = self.inner.registry.get(name)?;

        tracing::debug!("ThemeStore::select - switching to {:?}", name);
        *self.inner.active.write().unwrap() = theme.clone();
        self.notify(&theme);
        Ok(())
    }

    /// Register a callback invoked once immediately with the active
    /// theme, then again after every successful [`select`].
    ///
    /// Callbacks run synchronously on the selecting thread and must not
    /// call [`select`] themselves; notification order is undefined if
    /// they do.
    ///
    /// [`select`]: ThemeStore::select
    pub fn subscribe(&self, callback: impl Fn(&Theme) + Send + Sync + 'static) -> Subscription {
        let callback: ThemeCallback = Arc::new(callback);
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);

        self.inner.subscribers.lock().unwrap().push(Subscriber {
            id,
            callback: callback.clone(),
        });

        let active = self.active();
        callback(&active);

        Subscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Invoke every subscriber with `theme`.
    ///
    /// Callbacks run outside the subscriber lock so they may subscribe
    /// or unsubscribe without deadlocking.
    fn notify(&self, theme: &Theme) {
        let callbacks: Vec<ThemeCallback> = self
            .inner
            .subscribers
            .lock()
            .unwrap()
            .iter()
            .map(|subscriber| subscriber.callback.clone())
            .collect();

        for callback in callbacks {
            callback(theme);
        }
    }
}
