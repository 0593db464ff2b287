//! Macros for ergonomic state machine construction.

/// Declare a fieldless enum usable as a state identifier.
///
/// Derives the traits [`State`](crate::State) requires and names each
/// variant after its identifier.
///
/// # Example
///
/// ```
/// use waystate::{state_enum, State};
///
/// state_enum! {
///     pub enum Checkout {
///         Cart,
///         Payment,
///         Done,
///     }
/// }
///
/// assert_eq!(Checkout::Payment.name(), "Payment");
/// assert!(Checkout::Cart < Checkout::Done);
/// ```
#[macro_export]
macro_rules! state_enum {
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> ::std::borrow::Cow<'_, str> {
                match self {
                    $(Self::$variant => ::std::borrow::Cow::Borrowed(stringify!($variant))),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_orders_by_declaration() {
        assert!(TestState::Initial < TestState::Processing);
        assert!(TestState::Processing < TestState::Complete);
    }

    #[test]
    fn state_enum_supports_visibility_and_attributes() {
        state_enum! {
            /// Documented state set
            pub enum PublicState {
                #[allow(dead_code)]
                A,
                B,
            }
        }

        let state = PublicState::B;
        assert_eq!(state.name(), "B");
    }
}
