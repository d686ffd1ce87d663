//! Property-based tests for the store and reducer core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated dispatch sequences.

use proptest::prelude::*;
use reflow::core::{Action, Reducer};
use reflow::store::Store;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct CounterState {
    count: i64,
}

#[derive(Clone, PartialEq, Debug)]
enum CounterAction {
    Increment,
    Decrement,
    Step(i64),
    Unknown,
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
            Self::Step(_) => "Step",
            Self::Unknown => "Unknown",
        }
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
        CounterAction::Step(step) => CounterState {
            count: state.count + step,
        },
        CounterAction::Unknown => state.clone(),
    })
}

fn delta(action: &CounterAction) -> i64 {
    match action {
        CounterAction::Increment => 1,
        CounterAction::Decrement => -1,
        CounterAction::Step(step) => *step,
        CounterAction::Unknown => 0,
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..4u8, step in -100i64..100) -> CounterAction {
        match variant {
            0 => CounterAction::Increment,
            1 => CounterAction::Decrement,
            2 => CounterAction::Step(step),
            _ => CounterAction::Unknown,
        }
    }
}

proptest! {
    #[test]
    fn reducer_is_deterministic(action in arbitrary_action(), start in -1000i64..1000) {
        let reducer = counter_reducer();
        let state = CounterState { count: start };

        let result1 = reducer.reduce(&state, &action);
        let result2 = reducer.reduce(&state, &action);

        prop_assert_eq!(result1, result2);
    }

    #[test]
    fn reducer_never_mutates_its_input(action in arbitrary_action(), start in -1000i64..1000) {
        let reducer = counter_reducer();
        let state = CounterState { count: start };

        let _ = reducer.reduce(&state, &action);

        prop_assert_eq!(state.count, start);
    }

    #[test]
    fn unknown_kind_is_always_identity(start in -1000i64..1000) {
        let reducer = counter_reducer();
        let state = CounterState { count: start };

        let next = reducer.reduce(&state, &CounterAction::Unknown);

        prop_assert_eq!(next, state);
    }

    #[test]
    fn dispatched_sequence_equals_folded_deltas(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
        start in -1000i64..1000,
    ) {
        let store = Store::new(counter_reducer(), CounterState { count: start });

        for action in &actions {
            store.dispatch(action.clone());
        }

        let expected: i64 = start + actions.iter().map(delta).sum::<i64>();
        prop_assert_eq!(store.get_state().count, expected);
    }

    #[test]
    fn every_dispatch_notifies_exactly_once(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
    ) {
        let store = Store::new(counter_reducer(), CounterState { count: 0 });
        let calls = Arc::new(AtomicUsize::new(0));

        let observed = calls.clone();
        let _sub = store.subscribe(move || {
            observed.fetch_add(1, Ordering::SeqCst);
        });

        for action in &actions {
            store.dispatch(action.clone());
        }

        prop_assert_eq!(calls.load(Ordering::SeqCst), actions.len());
    }

    #[test]
    fn observers_always_fire_in_registration_order(
        actions in prop::collection::vec(arbitrary_action(), 1..10),
    ) {
        let store = Store::new(counter_reducer(), CounterState { count: 0 });
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let seen_a = order.clone();
        let _a = store.subscribe(move || seen_a.lock().unwrap().push('A'));
        let seen_b = order.clone();
        let _b = store.subscribe(move || seen_b.lock().unwrap().push('B'));

        for action in &actions {
            store.dispatch(action.clone());
        }

        let seen = order.lock().unwrap();
        prop_assert_eq!(seen.len(), actions.len() * 2);
        for pair in seen.chunks(2) {
            prop_assert_eq!(pair[0], 'A');
            prop_assert_eq!(pair[1], 'B');
        }
    }

    #[test]
    fn composed_split_reducers_match_a_single_reducer(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
    ) {
        // Splitting the counter into one reducer per kind must behave
        // exactly like the single reducer handling all kinds.
        let increments = Reducer::new(|s: &CounterState, a: &CounterAction| match a {
            CounterAction::Increment => CounterState { count: s.count + 1 },
            _ => s.clone(),
        });
        let decrements = Reducer::new(|s: &CounterState, a: &CounterAction| match a {
            CounterAction::Decrement => CounterState { count: s.count - 1 },
            _ => s.clone(),
        });
        let steps = Reducer::new(|s: &CounterState, a: &CounterAction| match a {
            CounterAction::Step(step) => CounterState { count: s.count + step },
            _ => s.clone(),
        });

        let split = Store::new(
            Reducer::compose(vec![increments, decrements, steps]),
            CounterState { count: 0 },
        );
        let single = Store::new(counter_reducer(), CounterState { count: 0 });

        for action in &actions {
            split.dispatch(action.clone());
            single.dispatch(action.clone());
        }

        prop_assert_eq!(split.get_state(), single.get_state());
    }
}
