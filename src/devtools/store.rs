//! Store decorator that records every dispatch.

use crate::core::{Action, State};
use crate::devtools::log::{DispatchLog, DispatchRecord};
use crate::store::{Observer, StateStore, Subscription};
use chrono::Utc;
use std::marker::PhantomData;
use std::sync::RwLock;

/// A store decorated with dispatch recording.
///
/// Wraps any [`StateStore`] implementation - the base container or an
/// already-persisted store - and appends one [`DispatchRecord`] per
/// dispatch. All three contract operations delegate to the inner store.
///
/// # Example
///
/// ```rust
/// use reflow::core::{Action, Reducer};
/// use reflow::devtools::DevtoolsStore;
/// use reflow::store::Store;
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
/// let inner = Store::new(Reducer::new(|n: &u32, _: &Tick| n + 1), 0);
/// let store = DevtoolsStore::wrap(inner);
///
/// store.dispatch(Tick::Tick);
/// store.dispatch(Tick::Tick);
///
/// let log = store.log();
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.records()[0].kind, "Tick");
/// assert_eq!(log.states(), vec![&1, &2]);
/// ```
pub struct DevtoolsStore<S: State, A: Action, T: StateStore<S, A>> {
    inner: T,
    log: RwLock<DispatchLog<S>>,
    _phantom: PhantomData<A>,
}

impl<S: State, A: Action, T: StateStore<S, A>> DevtoolsStore<S, A, T> {
    /// Wrap an inner store, starting with an empty log.
    pub fn wrap(inner: T) -> Self {
        Self {
            inner,
            log: RwLock::new(DispatchLog::new()),
            _phantom: PhantomData,
        }
    }

    /// Get a clone of the current state. No side effects.
    pub fn get_state(&self) -> S {
        self.inner.get_state()
    }

    /// Dispatch through the inner store, then record the action's tag
    /// and the resulting state.
    pub fn dispatch(&self, action: A) {
        let kind = action.kind().to_string();
        self.inner.dispatch(action);

        let record = DispatchRecord {
            kind,
            timestamp: Utc::now(),
            state_after: self.inner.get_state(),
        };

        let mut log = self.log.write().unwrap();
        let next = log.record(record);
        *log = next;
    }

    /// Register an observer on the inner store.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.subscribe(Box::new(observer))
    }

    /// A copy of the dispatch log so far.
    pub fn log(&self) -> DispatchLog<S> {
        self.log.read().unwrap().clone()
    }

    /// Export the dispatch log as JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.log.read().unwrap())
    }

    /// The wrapped store.
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<S: State, A: Action, T: StateStore<S, A>> StateStore<S, A> for DevtoolsStore<S, A, T> {
    fn get_state(&self) -> S {
        DevtoolsStore::get_state(self)
    }

    fn dispatch(&self, action: A) {
        DevtoolsStore::dispatch(self, action)
    }

    fn subscribe(&self, observer: Observer) -> Subscription {
        self.inner.subscribe(observer)
    }
}
