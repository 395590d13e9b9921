//! Error types for constraint checks
//!
//! Two outcome categories are kept strictly apart:
//!
//! - a **violation** ([`ValidationError`]): the value was checked and rejected;
//! - a **usage error** ([`UnsupportedTypeError`]): the check was applied to a value
//!   shape it does not support. This is a programming mistake and is never folded
//!   into "valid" or "invalid".
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the common
//! case of static codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured constraint violation.
///
/// # Examples
///
/// ```rust
/// use validation_ext::foundation::ValidationError;
///
/// let error = ValidationError::new("one_of", "must be one of [A, B]")
///     .with_field("status")
///     .with_param("values", "A, B");
///
/// assert_eq!(error.param("values"), Some("A, B"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "alphanumeric", "one_of"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field path, filled in by the host that knows where the value came from.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template, in insertion order.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new violation with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Violations collected from several checks applied to the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// USAGE ERRORS
// ============================================================================

/// A check was applied to a value shape it does not support.
///
/// Displays as `"<Check> not supported for <Type> type"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{check} not supported for {type_name} type")]
pub struct UnsupportedTypeError {
    /// Name of the check that rejected the value, e.g. `"OneOf"`.
    pub check: &'static str,
    /// Runtime type name of the rejected value.
    pub type_name: &'static str,
}

impl UnsupportedTypeError {
    /// Creates a new usage error.
    #[must_use]
    pub fn new(check: &'static str, type_name: &'static str) -> Self {
        Self { check, type_name }
    }
}

/// Outcome of [`Constraint::validate`](crate::foundation::Constraint::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The value was checked and rejected.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The check does not support the value's shape.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedTypeError),
}

impl CheckError {
    /// Returns true if this is a violation rather than a usage error.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the violation, if any.
    #[must_use]
    pub fn violation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Unsupported(_) => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
