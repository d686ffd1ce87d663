//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer, State};
use crate::store::Store;

/// Builder for constructing stores with a fluent API.
///
/// Reducers accumulate and are composed in call order, so a root store
/// can be assembled from independent split reducers.
pub struct StoreBuilder<S: State, A: Action> {
    initial: Option<S>,
    reducers: Vec<Reducer<S, A>>,
}

impl<S: State, A: Action> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            reducers: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a reducer. Reducers apply in the order they were added.
    pub fn reducer(mut self, reducer: Reducer<S, A>) -> Self {
        self.reducers.push(reducer);
        self
    }

    /// Add a reducer from a bare closure.
    pub fn reducer_fn<F>(self, func: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        self.reducer(Reducer::new(func))
    }

    /// Add multiple reducers at once.
    pub fn reducers(mut self, reducers: Vec<Reducer<S, A>>) -> Self {
        self.reducers.extend(reducers);
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.reducers.is_empty() {
            return Err(BuildError::MissingReducer);
        }

        let reducer = Reducer::compose(self.reducers);
        Ok(Store::new(reducer, initial))
    }
}

impl<S: State, A: Action> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
