//! Persisted Counter with Devtools
//!
//! This example demonstrates decorator composition: a persisted store
//! wrapped in a devtools recorder, all behind the same three-operation
//! contract.
//!
//! Key concepts:
//! - `PersistedStore` hydrates from a snapshot and saves after each dispatch
//! - `DevtoolsStore` wraps any store implementing the contract
//! - Decorators compose by explicit construction order
//!
//! Run with: cargo run --example persisted_counter

use reflow::action_enum;
use reflow::core::Reducer;
use reflow::devtools::DevtoolsStore;
use reflow::persist::{FileBackend, PersistConfig, PersistedStore};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct CounterState {
    count: i64,
}

action_enum! {
    enum CounterAction {
        Increment,
        Decrement,
    }
}

fn counter_reducer() -> Reducer<CounterState, CounterAction> {
    Reducer::new(|state: &CounterState, action: &CounterAction| match action {
        CounterAction::Increment => CounterState {
            count: state.count + 1,
        },
        CounterAction::Decrement => CounterState {
            count: state.count - 1,
        },
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Persisted Counter Example ===\n");

    let root = std::env::temp_dir().join("reflow-persisted-counter");
    let config = PersistConfig::json("counter-storage");

    // Hydrates from the snapshot when one exists, so running this demo
    // repeatedly keeps counting from where the last run stopped.
    let persisted = PersistedStore::new(
        counter_reducer(),
        CounterState { count: 0 },
        FileBackend::new(&root),
        config,
    )?;

    let store = DevtoolsStore::wrap(persisted);
    println!("Hydrated state: {:?}", store.get_state());

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);

    println!("State after dispatches: {:?}", store.get_state());
    println!("Dispatch log: {}", store.export_json()?);

    if let Some(err) = store.inner().take_save_error() {
        println!("A snapshot save failed: {err}");
    }

    println!("\nSnapshots live under {}", root.display());
    println!("\n=== Example Complete ===");
    Ok(())
}
