//! Builder API for ergonomic store construction.
//!
//! This module provides a fluent builder and a macro for defining stores
//! and actions with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;
