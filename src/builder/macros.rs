//! Macros for ergonomic action definitions.

/// Generate `Action` trait implementation for payload-free enums.
///
/// The tag of each variant is its name. Variants carrying payloads need a
/// hand-written impl; see [`crate::core::Action`].
///
/// # Example
///
/// ```
/// use reflow::action_enum;
/// use reflow::core::Action;
///
/// action_enum! {
///     pub enum CounterAction {
///         Increment,
///         Decrement,
///         Reset,
///     }
/// }
///
/// assert_eq!(CounterAction::Reset.kind(), "Reset");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
