//! Thunks and deferred dispatch.
//!
//! The only asynchrony the container deals in is "call back into
//! `dispatch` later": a thunk runs arbitrary code with the store handle,
//! and a deferred dispatch fires a single action after a fixed delay.
//! There is no retry, cancellation, or deduplication to layer on top.

use crate::core::{Action, State};
use crate::store::Store;
use std::thread;
use std::time::Duration;

impl<S: State, A: Action> Store<S, A> {
    /// Run a closure with this store handle.
    ///
    /// The closure may read state and dispatch any number of times,
    /// synchronously. Useful for action creators that decide what to
    /// dispatch based on the current state, or that dispatch several
    /// actions as one logical operation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reflow::core::{Action, Reducer};
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
    /// let store = Store::new(Reducer::new(|n: &u32, _: &Tick| n + 1), 0);
    ///
    /// store.dispatch_thunk(|store| {
    ///     if store.get_state() < 2 {
    ///         store.dispatch(Tick::Tick);
    ///         store.dispatch(Tick::Tick);
    ///     }
    /// });
    ///
    /// assert_eq!(store.get_state(), 2);
    /// ```
    pub fn dispatch_thunk<F>(&self, thunk: F)
    where
        F: FnOnce(&Store<S, A>),
    {
        thunk(self)
    }

    /// Dispatch a single action after a fixed delay, on a background
    /// thread. Returns the thread's join handle.
    ///
    /// The delayed dispatch goes through the normal path: reducer, state
    /// replacement, full observer fan-out. Nothing coordinates overlap
    /// with other dispatches beyond the store's own locking.
    pub fn dispatch_after(&self, action: A, delay: Duration) -> thread::JoinHandle<()> {
        let store = self.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            store.dispatch(action);
        })
    }
}
