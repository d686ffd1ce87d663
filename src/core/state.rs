//! Core State marker trait for store state values.
//!
//! State is an opaque, immutable-by-convention value owned by a store.
//! It is replaced wholesale on every dispatch and never mutated in place.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Marker trait for store state types.
///
/// Any type with the required bounds is a valid state; there is nothing to
/// implement by hand thanks to the blanket impl.
///
/// # Required Traits
///
/// - `Clone`: reducers return fresh values, and `get_state` hands out copies
/// - `PartialEq`: states must be comparable in tests and identity checks
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for persistence
/// - `Send` + `Sync`: store handles may cross threads
///
/// # Example
///
/// ```rust
/// use reflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct CounterState {
///     count: i64,
/// }
///
/// fn assert_state<S: State>() {}
/// assert_state::<CounterState>();
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}

impl<T> State for T where
    T: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
}
