//! The minimal state container.

use crate::core::{Action, Reducer, State};
use crate::store::subscription::{Observer, Registration, Subscription};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// A state container holding one current value, replaceable only through
/// the reducer, with synchronous observer fan-out after every dispatch.
///
/// The store is a cheap-to-clone handle: clones share the same state and
/// the same observer list. Construct one explicitly and pass it to
/// whichever layer needs it; there is no ambient global instance.
///
/// # Notification policy
///
/// Observers are notified on **every** dispatch, in registration order,
/// before `dispatch` returns - including identity transitions where the
/// reducer returned the prior state unchanged. Always-notify is the fixed
/// contract here; a notify-on-change store is a different policy choice,
/// not a bug fix, and is deliberately not implemented.
///
/// # Re-entrancy
///
/// No lock is held while observers run, so an observer that calls
/// `dispatch` starts a nested full transition+notify cycle before the
/// outer fan-out resumes. This nesting is supported for compatibility,
/// but dispatching from inside an observer makes notification order hard
/// to reason about and is best avoided.
///
/// # Observer panics
///
/// A panicking observer propagates to the `dispatch` caller and aborts
/// the remaining fan-out. The store adds no containment; keeping
/// observers infallible is a caller responsibility.
///
/// # Example
///
/// ```rust
/// use reflow::core::{Action, Reducer};
/// use reflow::store::Store;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct CounterState {
///     count: i64,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "Increment",
///             Self::Decrement => "Decrement",
///         }
///     }
/// }
///
/// let reducer = Reducer::new(|state: &CounterState, action: &CounterAction| {
///     match action {
///         CounterAction::Increment => CounterState { count: state.count + 1 },
///         CounterAction::Decrement => CounterState { count: state.count - 1 },
///     }
/// });
///
/// let store = Store::new(reducer, CounterState { count: 0 });
///
/// store.dispatch(CounterAction::Increment);
/// assert_eq!(store.get_state().count, 1);
///
/// store.dispatch(CounterAction::Decrement);
/// assert_eq!(store.get_state().count, 0);
/// ```
pub struct Store<S: State, A: Action> {
    state: Arc<RwLock<S>>,
    reducer: Arc<Reducer<S, A>>,
    registry: Arc<RwLock<Vec<Registration>>>,
}

impl<S: State, A: Action> Store<S, A> {
    /// Create a store with the given reducer and initial state.
    pub fn new(reducer: Reducer<S, A>, initial: S) -> Self {
        Store {
            state: Arc::new(RwLock::new(initial)),
            reducer: Arc::new(reducer),
            registry: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get a clone of the current state. No side effects.
    pub fn get_state(&self) -> S {
        self.state.read().unwrap().clone()
    }

    /// Read the current state through a borrow, without cloning.
    ///
    /// The closure must not call back into the store; `dispatch` from
    /// inside it would deadlock on the state lock.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Apply the reducer to `(current, action)`, replace the state with
    /// the result, then notify every registered observer.
    ///
    /// The replacement happens even when the reducer returned the prior
    /// state unchanged (a no-op replace), and observers are notified
    /// regardless; see the type-level docs for the policy.
    pub fn dispatch(&self, action: A) {
        {
            let mut state = self.state.write().unwrap();
            let next = self.reducer.reduce(&state, &action);
            *state = next;
        }
        self.notify();
    }

    /// Register an observer; returns the capability that removes it.
    ///
    /// Observers are invoked with no arguments, in registration order, on
    /// every dispatch. A subscribe issued from inside an observer takes
    /// effect from the next dispatch.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.registry.write().unwrap().push(Registration {
            id,
            observer: Arc::new(observer),
        });
        Subscription::new(id, Arc::downgrade(&self.registry))
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.registry.read().unwrap().len()
    }

    /// Invoke every registered observer, in registration order.
    ///
    /// The list is snapshotted first and no lock is held during the
    /// calls, so observers may subscribe, unsubscribe, or dispatch
    /// without deadlocking.
    fn notify(&self) {
        let snapshot: Vec<Arc<dyn Fn() + Send + Sync>> = self
            .registry
            .read()
            .unwrap()
            .iter()
            .map(|registration| Arc::clone(&registration.observer))
            .collect();

        for observer in snapshot {
            observer();
        }
    }
}

impl<S: State, A: Action> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Store {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<S: State, A: Action> crate::store::StateStore<S, A> for Store<S, A> {
    fn get_state(&self) -> S {
        Store::get_state(self)
    }

    fn dispatch(&self, action: A) {
        Store::dispatch(self, action)
    }

    fn subscribe(&self, observer: Observer) -> Subscription {
        Store::subscribe(self, observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct CounterState {
        count: i64,
    }

    #[derive(Clone, Debug)]
    enum CounterAction {
        Increment,
        Decrement,
        Unknown,
    }

    impl Action for CounterAction {
        fn kind(&self) -> &str {
            match self {
                Self::Increment => "Increment",
                Self::Decrement => "Decrement",
                Self::Unknown => "Unknown",
            }
        }
    }

    fn counter_store() -> Store<CounterState, CounterAction> {
        let reducer = Reducer::new(|state: &CounterState, action: &CounterAction| match action {
            CounterAction::Increment => CounterState {
                count: state.count + 1,
            },
            CounterAction::Decrement => CounterState {
                count: state.count - 1,
            },
            CounterAction::Unknown => state.clone(),
        });
        Store::new(reducer, CounterState { count: 0 })
    }

    #[test]
    fn counter_scenario() {
        let store = counter_store();
        assert_eq!(store.get_state().count, 0);

        store.dispatch(CounterAction::Increment);
        assert_eq!(store.get_state().count, 1);

        store.dispatch(CounterAction::Decrement);
        assert_eq!(store.get_state().count, 0);
    }

    #[test]
    fn unrecognized_kind_leaves_state_unchanged() {
        let store = counter_store();
        store.dispatch(CounterAction::Increment);

        store.dispatch(CounterAction::Unknown);
        assert_eq!(store.get_state().count, 1);
    }

    #[test]
    fn observer_runs_exactly_once_per_dispatch() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = calls.clone();
        let _sub = store.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);

        store.dispatch(CounterAction::Increment);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        store.dispatch(CounterAction::Decrement);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn noop_dispatch_still_notifies() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = calls.clone();
        let _sub = store.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Unknown);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn observers_run_in_registration_order() {
        let store = counter_store();
        let order = Arc::new(Mutex::new(Vec::new()));

        let seen_a = order.clone();
        let _a = store.subscribe(move || seen_a.lock().unwrap().push("A"));

        let seen_b = order.clone();
        let _b = store.subscribe(move || seen_b.lock().unwrap().push("B"));

        store.dispatch(CounterAction::Increment);
        store.dispatch(CounterAction::Increment);

        assert_eq!(*order.lock().unwrap(), vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let store = counter_store();
        let order = Arc::new(Mutex::new(Vec::new()));

        let seen_a = order.clone();
        let sub_a = store.subscribe(move || seen_a.lock().unwrap().push("A"));

        let seen_b = order.clone();
        let _sub_b = store.subscribe(move || seen_b.lock().unwrap().push("B"));

        sub_a.unsubscribe();
        store.dispatch(CounterAction::Increment);

        assert_eq!(*order.lock().unwrap(), vec!["B"]);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = calls.clone();
        let sub = store.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        sub.unsubscribe();
        store.dispatch(CounterAction::Increment);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn same_closure_subscribed_twice_has_two_identities() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = calls.clone();
        let sub_one = store.subscribe(move || {
            first.fetch_add(1, Ordering::SeqCst);
        });
        let second = calls.clone();
        let _sub_two = store.subscribe(move || {
            second.fetch_add(1, Ordering::SeqCst);
        });

        assert_ne!(sub_one.id(), _sub_two.id());

        sub_one.unsubscribe();
        store.dispatch(CounterAction::Increment);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_share_state_and_observers() {
        let store = counter_store();
        let handle = store.clone();

        let calls = Arc::new(AtomicUsize::new(0));
        let observed = calls.clone();
        let _sub = handle.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(CounterAction::Increment);

        assert_eq!(handle.get_state().count, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reentrant_dispatch_nests_before_outer_fanout_resumes() {
        let store = counter_store();
        let order = Arc::new(Mutex::new(Vec::new()));

        let inner_store = store.clone();
        let seen_a = order.clone();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired_once = fired.clone();
        let _a = store.subscribe(move || {
            seen_a.lock().unwrap().push("A");
            // Dispatch once from inside the observer; the nested cycle
            // runs to completion before B sees the outer dispatch.
            if fired_once.fetch_add(1, Ordering::SeqCst) == 0 {
                inner_store.dispatch(CounterAction::Increment);
            }
        });

        let seen_b = order.clone();
        let _b = store.subscribe(move || seen_b.lock().unwrap().push("B"));

        store.dispatch(CounterAction::Increment);

        // Outer A, then the full nested fan-out (A, B), then outer B.
        assert_eq!(*order.lock().unwrap(), vec!["A", "A", "B", "B"]);
        assert_eq!(store.get_state().count, 2);
    }

    #[test]
    fn panicking_observer_aborts_remaining_fanout() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let _a = store.subscribe(|| panic!("observer failed"));

        let observed = calls.clone();
        let _b = store.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        // The panic propagates to the dispatch caller; B never runs.
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.dispatch(CounterAction::Increment);
        }));

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // The transition itself had already been applied.
        assert_eq!(store.get_state().count, 1);
    }

    #[test]
    fn unsubscribe_during_fanout_takes_effect_next_dispatch() {
        let store = counter_store();
        let order = Arc::new(Mutex::new(Vec::new()));

        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

        let seen_a = order.clone();
        let to_remove = slot.clone();
        let _a = store.subscribe(move || {
            seen_a.lock().unwrap().push("A");
            if let Some(sub) = to_remove.lock().unwrap().take() {
                sub.unsubscribe();
            }
        });

        let seen_b = order.clone();
        let sub_b = store.subscribe(move || seen_b.lock().unwrap().push("B"));
        *slot.lock().unwrap() = Some(sub_b);

        // A unsubscribes B mid-fan-out; the snapshot keeps B's in-flight
        // invocation, so B still fires for this dispatch.
        store.dispatch(CounterAction::Increment);
        assert_eq!(*order.lock().unwrap(), vec!["A", "B"]);

        store.dispatch(CounterAction::Increment);
        assert_eq!(*order.lock().unwrap(), vec!["A", "B", "A"]);
        assert_eq!(store.observer_count(), 1);
    }

    #[test]
    fn subscribe_during_fanout_takes_effect_next_dispatch() {
        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));

        let registrar = store.clone();
        let late_calls = calls.clone();
        let registered = Arc::new(AtomicUsize::new(0));
        let register_once = registered.clone();
        let _a = store.subscribe(move || {
            if register_once.fetch_add(1, Ordering::SeqCst) == 0 {
                let observed = late_calls.clone();
                // Leak the capability; the registration outlives it anyway.
                let _ = registrar.subscribe(move || {
                    observed.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        store.dispatch(CounterAction::Increment);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        store.dispatch(CounterAction::Increment);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn with_state_reads_without_cloning() {
        let store = counter_store();
        store.dispatch(CounterAction::Increment);

        let count = store.with_state(|state| state.count);
        assert_eq!(count, 1);
    }
}
