//! Inspection decorator for stores.
//!
//! [`DevtoolsStore`] wraps any store implementing the container contract
//! and records every dispatch - the action's tag, a timestamp, and the
//! state it produced - into an ordered, exportable [`DispatchLog`].

mod log;
mod store;

pub use log::{DispatchLog, DispatchRecord};
pub use store::DevtoolsStore;
