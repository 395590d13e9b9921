//! Core types and traits for constraint checks
//!
//! - **Traits**: [`Configure`], [`Constraint`], [`AsCandidate`], [`EnumLabel`]
//! - **Values**: [`Candidate`], [`Number`], [`Opaque`]
//! - **Coercion**: [`Coercion`], [`Shape`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`UnsupportedTypeError`],
//!   [`CheckError`]
//!
//! # Outcomes
//!
//! A check answers `Ok(true)` or `Ok(false)` for every value it supports and
//! `Err(UnsupportedTypeError)` for every value it does not. Null (`None`) is always
//! valid; whether a value must be present is a separate concern.

pub mod candidate;
pub mod coercion;
pub mod error;
pub mod traits;

pub use candidate::{AsCandidate, Candidate, EnumLabel, Number, Opaque, Shape};
pub use coercion::Coercion;
pub use error::{CheckError, UnsupportedTypeError, ValidationError, ValidationErrors};
pub use traits::{Configure, Constraint};

// ============================================================================
// UTILITIES
// ============================================================================

/// Applies several checks to the same value.
///
/// Every check runs; one violation is collected per failing check. The first
/// usage error stops the run and is returned instead.
///
/// # Examples
///
/// ```rust
/// use validation_ext::prelude::*;
/// use validation_ext::foundation::validate_with_all;
///
/// let strict = alphanumeric();
/// let lenient = alphanumeric().ignore_chars("-_");
///
/// let errors = validate_with_all("abc-123", &[&strict, &lenient]).unwrap();
/// assert_eq!(errors.len(), 1);
///
/// let errors = validate_with_all("abc-123!", &[&strict, &lenient]).unwrap();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_with_all<T>(
    value: T,
    constraints: &[&dyn Constraint],
) -> Result<ValidationErrors, UnsupportedTypeError>
where
    T: AsCandidate,
{
    let candidate = value.as_candidate();
    let mut errors = ValidationErrors::new();

    for constraint in constraints {
        if !constraint.is_valid(candidate)? {
            errors.add(constraint.violation());
        }
    }

    Ok(errors)
}

/// A check result: `Ok(valid)` or a usage error.
pub type CheckResult = Result<bool, UnsupportedTypeError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod core_tests {
    use super::*;

    struct NonEmpty;

    impl Constraint for NonEmpty {
        fn name(&self) -> &'static str {
            "NonEmpty"
        }

        fn is_valid(&self, candidate: Option<Candidate<'_>>) -> CheckResult {
            match candidate {
                None => Ok(true),
                Some(Candidate::Text(text)) => Ok(!text.is_empty()),
                Some(other) => Err(UnsupportedTypeError::new(self.name(), other.type_name())),
            }
        }

        fn violation(&self) -> ValidationError {
            ValidationError::new("non_empty", "must not be empty")
        }
    }

    #[test]
    fn test_validate_with_all_collects_each_failure() {
        let errors = validate_with_all("", &[&NonEmpty, &NonEmpty]).unwrap();
        assert_eq!(errors.len(), 2);

        let errors = validate_with_all("x", &[&NonEmpty, &NonEmpty]).unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_with_all_propagates_usage_error() {
        let err = validate_with_all(3_i32, &[&NonEmpty]).unwrap_err();
        assert_eq!(err.to_string(), "NonEmpty not supported for i32 type");
    }

    #[test]
    fn test_validate_with_all_null() {
        let errors = validate_with_all(None::<&str>, &[&NonEmpty]).unwrap();
        assert!(errors.is_empty());
    }
}
