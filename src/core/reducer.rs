//! Pure reducer functions computing the next state.
//!
//! A reducer is a pure mapping from the current state and a dispatched
//! action to the next state. Reducers never mutate the state they are
//! given and never perform side effects; the store applies them and
//! handles notification.

use super::action::Action;
use super::state::State;

/// Pure transition function wrapped for storage and composition.
///
/// The wrapped function must be pure (deterministic, no side effects) and
/// must never panic for a well-formed action. Kinds the function does not
/// recognize take the identity arm: return the prior state, cloned.
///
/// # Example
///
/// ```rust
/// use reflow::core::{Action, Reducer};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct CounterState {
///     count: i64,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
///
/// impl Action for CounterAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Increment => "Increment",
///             Self::Decrement => "Decrement",
///         }
///     }
/// }
///
/// let reducer = Reducer::new(|state: &CounterState, action: &CounterAction| {
///     match action {
///         CounterAction::Increment => CounterState { count: state.count + 1 },
///         CounterAction::Decrement => CounterState { count: state.count - 1 },
///     }
/// });
///
/// let next = reducer.reduce(&CounterState { count: 0 }, &CounterAction::Increment);
/// assert_eq!(next.count, 1);
/// ```
pub struct Reducer<S: State, A: Action> {
    func: Box<dyn Fn(&S, &A) -> S + Send + Sync>,
}

impl<S: State, A: Action> Reducer<S, A> {
    /// Wrap a pure transition function.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&S, &A) -> S + Send + Sync + 'static,
    {
        Reducer {
            func: Box::new(func),
        }
    }

    /// The reducer that returns the prior state unchanged for every action.
    ///
    /// This is the explicit fallback arm: malformed or unrecognized
    /// requests are not an error, they are an identity transition.
    pub fn identity() -> Self {
        Reducer::new(|state: &S, _action: &A| state.clone())
    }

    /// Compute the next state from the current state and an action.
    ///
    /// This is a pure application; the caller owns the returned value.
    pub fn reduce(&self, state: &S, action: &A) -> S {
        (self.func)(state, action)
    }

    /// Sequential composition: apply `self`, then feed the result to `next`.
    ///
    /// This is how a root reducer is split into independent pieces that
    /// each handle their own action kinds over the same state, leaving
    /// everything else untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reflow::core::{Action, Reducer};
    ///
    /// #[derive(Clone, Debug)]
    /// enum Op {
    ///     Double,
    ///     AddOne,
    /// }
    ///
    /// impl Action for Op {
    ///     fn kind(&self) -> &str {
    ///         match self {
    ///             Self::Double => "Double",
    ///             Self::AddOne => "AddOne",
    ///         }
    ///     }
    /// }
    ///
    /// let doubler = Reducer::new(|s: &i64, a: &Op| match a {
    ///     Op::Double => s * 2,
    ///     _ => *s,
    /// });
    /// let adder = Reducer::new(|s: &i64, a: &Op| match a {
    ///     Op::AddOne => s + 1,
    ///     _ => *s,
    /// });
    ///
    /// let root = doubler.then(adder);
    /// assert_eq!(root.reduce(&3, &Op::Double), 6);
    /// assert_eq!(root.reduce(&3, &Op::AddOne), 4);
    /// ```
    pub fn then(self, next: Reducer<S, A>) -> Reducer<S, A> {
        Reducer::new(move |state: &S, action: &A| {
            let intermediate = self.reduce(state, action);
            next.reduce(&intermediate, action)
        })
    }

    /// Fold a list of reducers into one, applied left to right.
    ///
    /// An empty list yields the identity reducer.
    pub fn compose(reducers: Vec<Reducer<S, A>>) -> Reducer<S, A> {
        reducers
            .into_iter()
            .fold(Reducer::identity(), |acc, next| acc.then(next))
    }

    /// Lift a reducer over a sub-state into a reducer over a parent state.
    ///
    /// `get` extracts the sub-state, `put` writes the reduced sub-state
    /// back into a fresh parent value. The rest of the parent state is
    /// untouched, so each slice of the application owns exactly one piece
    /// of the root state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use reflow::core::{Action, Reducer};
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// struct AppState {
    ///     count: i64,
    ///     fish: i64,
    /// }
    ///
    /// #[derive(Clone, Debug)]
    /// enum AppAction {
    ///     Increment,
    ///     IncrementFish,
    /// }
    ///
    /// impl Action for AppAction {
    ///     fn kind(&self) -> &str {
    ///         match self {
    ///             Self::Increment => "Increment",
    ///             Self::IncrementFish => "IncrementFish",
    ///         }
    ///     }
    /// }
    ///
    /// let fish = Reducer::new(|fish: &i64, action: &AppAction| match action {
    ///     AppAction::IncrementFish => fish + 1,
    ///     _ => *fish,
    /// });
    ///
    /// let root = fish.focus(
    ///     |app: &AppState| app.fish,
    ///     |app: &AppState, fish| AppState { fish, ..app.clone() },
    /// );
    ///
    /// let state = AppState { count: 9, fish: 88 };
    /// let next = root.reduce(&state, &AppAction::IncrementFish);
    /// assert_eq!(next.fish, 89);
    /// assert_eq!(next.count, 9);
    /// ```
    pub fn focus<P, G, U>(self, get: G, put: U) -> Reducer<P, A>
    where
        P: State,
        G: Fn(&P) -> S + Send + Sync + 'static,
        U: Fn(&P, S) -> P + Send + Sync + 'static,
    {
        Reducer::new(move |parent: &P, action: &A| {
            let sub = get(parent);
            let next = self.reduce(&sub, action);
            put(parent, next)
        })
    }
}
