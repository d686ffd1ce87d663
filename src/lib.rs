//! Reflow: a predictable state container library
//!
//! Reflow holds application state in a [`Store`]: one current value,
//! replaced only by pure reducer functions applied to dispatched actions,
//! with synchronous observer notification after every dispatch. The core
//! is pure functions with no side effects; the store is the thin
//! imperative shell around them, and persistence and inspection are
//! decorators over the same three-operation contract.
//!
//! # Core Concepts
//!
//! - **State**: immutable-by-convention values via the [`State`] marker trait
//! - **Action**: tagged transition requests via the [`Action`] trait
//! - **Reducer**: pure `(state, action) -> state` functions with combinators
//! - **Store**: `get_state` / `dispatch` / `subscribe`, synchronous fan-out
//!
//! # Example
//!
//! ```rust
//! use reflow::core::{Action, Reducer};
//! use reflow::store::Store;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! impl Action for CounterAction {
//!     fn kind(&self) -> &str {
//!         match self {
//!             Self::Increment => "Increment",
//!             Self::Decrement => "Decrement",
//!         }
//!     }
//! }
//!
//! let reducer = Reducer::new(|state: &CounterState, action: &CounterAction| {
//!     match action {
//!         CounterAction::Increment => CounterState { count: state.count + 1 },
//!         CounterAction::Decrement => CounterState { count: state.count - 1 },
//!     }
//! });
//!
//! let store = Store::new(reducer, CounterState { count: 0 });
//!
//! let sub = store.subscribe(|| {
//!     // a UI layer would re-read state and re-render here
//! });
//!
//! store.dispatch(CounterAction::Increment);
//! assert_eq!(store.get_state().count, 1);
//!
//! sub.unsubscribe();
//! ```

pub mod builder;
pub mod core;
pub mod devtools;
pub mod persist;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Action, Reducer, State};
pub use builder::{BuildError, StoreBuilder};
pub use store::{Observer, StateStore, Store, Subscription};
