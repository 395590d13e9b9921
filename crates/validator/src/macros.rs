//! Macros for wiring enumerated types into the checks.
//!
//! - [`enum_label!`]: declare a field-less enum whose variant names are its labels

// ============================================================================
// ENUM LABEL MACRO
// ============================================================================

/// Declares a field-less enum, implements [`EnumLabel`] from the variant names,
/// and implements [`AsCandidate`] so values can be passed straight to a check.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied; add
/// other attributes (including a custom `Display`) as usual. Checks never look
/// at `Display`, only at the variant name.
///
/// # Examples
///
/// ```rust
/// use validation_ext::enum_label;
/// use validation_ext::prelude::*;
///
/// enum_label! {
///     /// Account state.
///     pub enum State {
///         Active,
///         Locked,
///     }
/// }
///
/// impl std::fmt::Display for State {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("state of the account")
///     }
/// }
///
/// assert_eq!(State::Locked.label(), "Locked");
/// assert_eq!(one_of(["Active"]).check(State::Active), Ok(true));
/// assert_eq!(one_of(["active"]).ignore_case(true).check(State::Active), Ok(true));
/// ```
///
/// [`EnumLabel`]: crate::foundation::EnumLabel
/// [`AsCandidate`]: crate::foundation::AsCandidate
#[macro_export]
macro_rules! enum_label {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::foundation::EnumLabel for $name {
            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl $crate::foundation::AsCandidate for $name {
            #[inline]
            fn as_candidate(&self) -> Option<$crate::foundation::Candidate<'_>> {
                Some($crate::foundation::Candidate::label(self))
            }
        }
    };
}
