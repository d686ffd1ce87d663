//! Build errors for store construction.

use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No reducer provided. Add at least one with .reducer(..) or .reducer_fn(..)")]
    MissingReducer,
}
