//! Core traits for constraint checks
//!
//! A check has two lifecycle phases: it is configured once from its options
//! ([`Configure`]) and then asked about candidate values any number of times
//! ([`Constraint`]). Configured checks are immutable and `Send + Sync`, so a
//! single instance can serve many threads.

use crate::foundation::{AsCandidate, Candidate, CheckError, UnsupportedTypeError, ValidationError};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Builds a check from its declaration options.
///
/// # Examples
///
/// ```rust
/// use validation_ext::prelude::*;
///
/// let status = OneOf::configure(OneOfOptions {
///     values: vec!["ACTIVE".into(), "LOCKED".into()],
///     ignore_case: true,
/// });
/// assert_eq!(status.check("active"), Ok(true));
/// ```
pub trait Configure: Sized {
    /// Declaration options, usually deserialized from configuration.
    type Options;

    /// Builds the immutable check.
    fn configure(options: Self::Options) -> Self;
}

// ============================================================================
// CONSTRAINT
// ============================================================================

/// A configured predicate over candidate values.
///
/// `Ok(false)` means the value violates the constraint. `Err` is reserved for
/// values whose shape the check does not support; it is a usage error and must
/// reach the caller unchanged.
///
/// The trait is object safe, so checks of different kinds can be applied to the
/// same value through `&dyn Constraint` (see
/// [`validate_with_all`](crate::foundation::validate_with_all)).
pub trait Constraint {
    /// Name used in usage errors, e.g. `"Alphanumeric"`.
    fn name(&self) -> &'static str;

    /// Decides whether `candidate` is valid. `None` is a null value and is always valid.
    fn is_valid(&self, candidate: Option<Candidate<'_>>) -> Result<bool, UnsupportedTypeError>;

    /// The violation reported when a value is invalid.
    fn violation(&self) -> ValidationError;

    /// Checks any value that converts into a candidate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use validation_ext::prelude::*;
    ///
    /// let code = alphanumeric().ignore_chars("-");
    /// assert_eq!(code.check("AB-12"), Ok(true));
    /// assert_eq!(code.check(&None::<String>), Ok(true));
    /// assert_eq!(code.check('#'), Ok(false));
    /// ```
    fn check<T>(&self, value: T) -> Result<bool, UnsupportedTypeError>
    where
        Self: Sized,
        T: AsCandidate,
    {
        self.is_valid(value.as_candidate())
    }

    /// Like [`check`](Constraint::check), but turns an invalid value into a
    /// [`ValidationError`] so callers can use `?`.
    fn validate<T>(&self, value: T) -> Result<(), CheckError>
    where
        Self: Sized,
        T: AsCandidate,
    {
        if self.check(value)? {
            Ok(())
        } else {
            tracing::trace!(check = self.name(), "value rejected");
            Err(CheckError::Invalid(self.violation()))
        }
    }
}

impl<C: Constraint + ?Sized> Constraint for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_valid(&self, candidate: Option<Candidate<'_>>) -> Result<bool, UnsupportedTypeError> {
        (**self).is_valid(candidate)
    }

    fn violation(&self) -> ValidationError {
        (**self).violation()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Accepts only the exact text "ok".
    struct OnlyOk;

    impl Constraint for OnlyOk {
        fn name(&self) -> &'static str {
            "OnlyOk"
        }

        fn is_valid(&self, candidate: Option<Candidate<'_>>) -> Result<bool, UnsupportedTypeError> {
            match candidate {
                None => Ok(true),
                Some(Candidate::Text(text)) => Ok(text == "ok"),
                Some(other) => Err(UnsupportedTypeError::new("OnlyOk", other.type_name())),
            }
        }

        fn violation(&self) -> ValidationError {
            ValidationError::new("only_ok", "must be ok")
        }
    }

    #[test]
    fn test_check_and_validate() {
        assert_eq!(OnlyOk.check("ok"), Ok(true));
        assert_eq!(OnlyOk.check("no"), Ok(false));
        assert!(OnlyOk.validate("ok").is_ok());

        let err = OnlyOk.validate("no").unwrap_err();
        assert_eq!(err.violation().map(|e| e.code.as_ref()), Some("only_ok"));
    }

    #[test]
    fn test_usage_error_passes_through_validate() {
        let err = OnlyOk.validate(1_u8).unwrap_err();
        assert_eq!(
            err,
            CheckError::Unsupported(UnsupportedTypeError::new("OnlyOk", "u8"))
        );
    }

    #[test]
    fn test_reference_forwards() {
        let by_ref: &dyn Constraint = &OnlyOk;
        assert_eq!(by_ref.name(), "OnlyOk");
        assert_eq!(Constraint::check(&by_ref, "ok"), Ok(true));
        assert_eq!(Constraint::check(&by_ref, None::<&str>), Ok(true));
    }
}
