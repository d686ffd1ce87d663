//! The imperative shell: the state container and its contract.
//!
//! [`Store`] owns one state value and an ordered observer list; dispatch
//! applies the pure reducer from [`crate::core`], replaces the state, and
//! fans out to observers synchronously. The [`StateStore`] trait is the
//! three-operation contract the store and every decorator implement, so
//! layers compose by explicit construction order.

mod store;
mod subscription;
mod thunk;

pub use store::Store;
pub use subscription::{Observer, Subscription};

use crate::core::{Action, State};

/// The three-operation state container contract.
///
/// Implemented by [`Store`] and by decorators such as
/// [`PersistedStore`](crate::persist::PersistedStore) and
/// [`DevtoolsStore`](crate::devtools::DevtoolsStore), which delegate to an
/// inner implementation. Decorators are composed by constructing one
/// around another; there is no implicit middleware chain.
pub trait StateStore<S: State, A: Action> {
    /// Get a clone of the current state. No side effects.
    fn get_state(&self) -> S;

    /// Apply the transition described by `action`, replace the state,
    /// then synchronously notify every registered observer in
    /// registration order.
    fn dispatch(&self, action: A);

    /// Register an observer; returns the capability that removes it.
    fn subscribe(&self, observer: Observer) -> Subscription;
}
