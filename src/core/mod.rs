//! Core state container types and logic.
//!
//! This module contains the pure functional core of the container:
//! - State values via the `State` marker trait
//! - Tagged transition requests via the `Action` trait
//! - Pure transition functions via `Reducer` and its combinators
//!
//! All logic in this module is pure (no side effects); the store in
//! [`crate::store`] is the imperative shell around it.

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::State;
