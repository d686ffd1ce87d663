//! Basic Counter Store
//!
//! This example demonstrates the minimal state container: one state
//! value, a pure reducer, and synchronous observer notification.
//!
//! Key concepts:
//! - Explicitly constructed store, passed by handle (no global singleton)
//! - Pure reducers with an identity arm for unrecognized kinds
//! - Subscribe returns an idempotent unsubscribe capability
//!
//! Run with: cargo run --example counter

use reflow::action_enum;
use reflow::core::Reducer;
use reflow::store::Store;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct CounterState {
    count: i64,
}

action_enum! {
    enum CounterAction {
        Increment,
        Decrement,
        Reset,
    }
}

fn main() {
    println!("=== Basic Counter Store Example ===\n");

    let reducer = Reducer::new(|state: &CounterState, action: &CounterAction| match action {
        CounterAction::Increment => CounterState {
            count: state.count + 1,
        },
        CounterAction::Decrement => CounterState {
            count: state.count - 1,
        },
        CounterAction::Reset => CounterState { count: 0 },
    });

    let store = Store::new(reducer, CounterState { count: 0 });
    println!("Initial state: {:?}", store.get_state());

    let watcher = store.clone();
    let sub = store.subscribe(move || {
        println!("store changed: {:?}", watcher.get_state());
    });

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);

    sub.unsubscribe();

    // No observer fires for this one.
    store.dispatch(CounterAction::Reset);
    println!("Final state: {:?}", store.get_state());

    println!("\n=== Example Complete ===");
}
