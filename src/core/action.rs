//! Actions: tagged descriptions of intended state changes.
//!
//! An action carries a tag (its kind) and optionally a payload in the
//! variant fields. Actions describe *what happened*; reducers decide how
//! the state changes in response.

use std::fmt::Debug;

/// Trait for dispatched actions.
///
/// Applications define one closed enum per store, one variant per request
/// kind. The reducer matches on the enum exhaustively; kinds the reducer
/// does not recognize fall through to an identity arm that returns the
/// prior state unchanged.
///
/// For payload-free enums the [`action_enum!`](crate::action_enum) macro
/// generates this impl. Variants with payloads implement it by hand.
///
/// # Example
///
/// ```rust
/// use reflow::core::Action;
///
/// #[derive(Clone, Debug)]
/// enum ProfileAction {
///     ChangeName(String),
///     AddNumber(i64),
/// }
///
/// impl Action for ProfileAction {
///     fn kind(&self) -> &str {
///         match self {
///             Self::ChangeName(_) => "ChangeName",
///             Self::AddNumber(_) => "AddNumber",
///         }
///     }
/// }
///
/// assert_eq!(ProfileAction::AddNumber(8).kind(), "AddNumber");
/// ```
pub trait Action: Clone + Debug + Send + Sync + 'static {
    /// Get the action's tag for display, logging, and devtools records.
    ///
    /// Returns a static string per variant; the tag must not depend on
    /// the payload.
    fn kind(&self) -> &str;
}
