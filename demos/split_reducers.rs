//! Split Reducers
//!
//! This example demonstrates assembling a root store from independent
//! reducers: two slices focused on their own fields of the root state,
//! composed through the builder.
//!
//! Key concepts:
//! - `Reducer::focus` lifts a sub-state reducer over the parent state
//! - `StoreBuilder` composes reducers in call order
//! - Each slice ignores kinds it does not recognize
//!
//! Run with: cargo run --example split_reducers

use reflow::core::{Action, Reducer};
use reflow::StoreBuilder;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct AppState {
    count: i64,
    fish: i64,
}

#[derive(Clone, Debug)]
enum AppAction {
    Increment,
    Decrement,
    IncrementFish,
}

impl Action for AppAction {
    fn kind(&self) -> &str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::IncrementFish => "IncrementFish",
        }
    }
}

fn counter_slice() -> Reducer<AppState, AppAction> {
    let counter = Reducer::new(|count: &i64, action: &AppAction| match action {
        AppAction::Increment => count + 1,
        AppAction::Decrement => count - 1,
        _ => *count,
    });

    counter.focus(
        |app: &AppState| app.count,
        |app: &AppState, count| AppState { count, ..*app },
    )
}

fn fish_slice() -> Reducer<AppState, AppAction> {
    let fish = Reducer::new(|fish: &i64, action: &AppAction| match action {
        AppAction::IncrementFish => fish + 1,
        _ => *fish,
    });

    fish.focus(
        |app: &AppState| app.fish,
        |app: &AppState, fish| AppState { fish, ..*app },
    )
}

fn main() {
    println!("=== Split Reducers Example ===\n");

    let store = StoreBuilder::new()
        .initial(AppState { count: 9, fish: 88 })
        .reducer(counter_slice())
        .reducer(fish_slice())
        .build()
        .unwrap();

    println!("Initial state: {:?}", store.get_state());

    store.dispatch(AppAction::Increment);
    store.dispatch(AppAction::IncrementFish);
    store.dispatch(AppAction::Decrement);

    let state = store.get_state();
    println!("After dispatches: {:?}", state);
    assert_eq!(state.count, 9);
    assert_eq!(state.fish, 89);

    println!("\n=== Example Complete ===");
}
