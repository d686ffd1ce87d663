//! Observer registration and the unsubscribe capability.

use std::sync::{Arc, RwLock, Weak};
use uuid::Uuid;

/// Boxed zero-argument observer callback.
///
/// Observers receive no payload; they re-read state through the store
/// after being notified.
pub type Observer = Box<dyn Fn() + Send + Sync>;

/// One registered observer. Identity is a fresh v4 uuid so removal
/// targets exactly this registration, even if the same closure is
/// subscribed twice.
pub(crate) struct Registration {
    pub(crate) id: Uuid,
    pub(crate) observer: Arc<dyn Fn() + Send + Sync>,
}

/// Unsubscribe capability returned by `subscribe`.
///
/// Calling [`unsubscribe`](Subscription::unsubscribe) removes the observer
/// it was issued for. The call is idempotent: the second and later calls
/// are no-ops, as is a call made after the store itself has been dropped.
///
/// # Example
///
/// ```rust
/// use reflow::core::{Action, Reducer};
/// use reflow::store::Store;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)]
/// enum Tick {
///     Tick,
/// }
///
/// impl Action for Tick {
///     fn kind(&self) -> &str {
///         "Tick"
///     }
/// }
///
/// let store = Store::new(Reducer::new(|n: &u32, _: &Tick| n + 1), 0);
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let observed = calls.clone();
/// let sub = store.subscribe(move || {
///     observed.fetch_add(1, Ordering::SeqCst);
/// });
///
/// store.dispatch(Tick::Tick);
/// sub.unsubscribe();
/// sub.unsubscribe(); // harmless
/// store.dispatch(Tick::Tick);
///
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct Subscription {
    id: Uuid,
    registry: Weak<RwLock<Vec<Registration>>>,
}

impl Subscription {
    pub(crate) fn new(id: Uuid, registry: Weak<RwLock<Vec<Registration>>>) -> Self {
        Subscription { id, registry }
    }

    /// The unique identity of this registration.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Remove the observer this capability was issued for.
    ///
    /// Idempotent; safe to call after the store is gone. An unsubscribe
    /// issued from inside an observer takes effect from the next
    /// dispatch, not the in-flight fan-out.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .write()
                .unwrap()
                .retain(|registration| registration.id != self.id);
        }
    }
}
