//! Alphanumeric check
//!
//! A value passes when, after removing the configured ignore-set, every
//! remaining character is an ASCII letter or digit. Text and single characters
//! are supported; any other shape is a usage error.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    Candidate, CheckResult, Coercion, Configure, Constraint, Shape, ValidationError,
};

const COERCION: Coercion = Coercion::new(Alphanumeric::NAME, &[Shape::Text, Shape::Char]);

/// Declaration options for [`Alphanumeric`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlphanumericOptions {
    /// Characters removed from the value before it is checked.
    #[serde(alias = "ignoreChars")]
    pub ignore_chars: String,
}

/// Validates that a value contains only ASCII letters and digits.
///
/// # Examples
///
/// ```rust
/// use validation_ext::prelude::*;
///
/// let plain = alphanumeric();
/// assert_eq!(plain.check("abc123"), Ok(true));
/// assert_eq!(plain.check("abc-123!"), Ok(false));
///
/// let lenient = alphanumeric().ignore_chars("-_ ");
/// assert_eq!(lenient.check("abc-123_ "), Ok(true));
/// assert_eq!(lenient.check("abc-123!"), Ok(false));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphanumeric {
    // Ignore-set in declaration order, for messages.
    declared: String,
    ignored: HashSet<char>,
}

impl Alphanumeric {
    /// Name reported in usage errors.
    pub const NAME: &'static str = "Alphanumeric";

    /// Creates a check with an empty ignore-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every character of `chars` to the ignore-set.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignore_chars(mut self, chars: &str) -> Self {
        for c in chars.chars() {
            if self.ignored.insert(c) {
                self.declared.push(c);
            }
        }
        self
    }

    /// Returns the ignore-set.
    pub fn ignored(&self) -> &HashSet<char> {
        &self.ignored
    }

    /// Removes every ignored character, keeping the order of the rest.
    ///
    /// Borrows the input when nothing has to be removed.
    pub fn strip_ignored<'s>(&self, value: &'s str) -> Cow<'s, str> {
        if !value.chars().any(|c| self.ignored.contains(&c)) {
            return Cow::Borrowed(value);
        }

        Cow::Owned(value.chars().filter(|c| !self.ignored.contains(c)).collect())
    }
}

impl Configure for Alphanumeric {
    type Options = AlphanumericOptions;

    fn configure(options: AlphanumericOptions) -> Self {
        let check = Self::new().ignore_chars(&options.ignore_chars);
        tracing::debug!(
            check = Self::NAME,
            ignored = check.ignored.len(),
            "configured constraint"
        );
        check
    }
}

impl Constraint for Alphanumeric {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_valid(&self, candidate: Option<Candidate<'_>>) -> CheckResult {
        let Some(candidate) = candidate else {
            return Ok(true);
        };

        let text = COERCION.coerce(&candidate)?;
        let remaining = self.strip_ignored(&text);
        if remaining.is_empty() {
            return Ok(true);
        }

        Ok(remaining.chars().all(|c| c.is_ascii_alphanumeric()))
    }

    fn violation(&self) -> ValidationError {
        let error = ValidationError::new("alphanumeric", "must be alphanumeric");
        if self.declared.is_empty() {
            error
        } else {
            error.with_param("ignore_chars", self.declared.clone())
        }
    }
}

/// Creates an alphanumeric check with an empty ignore-set.
#[must_use]
pub fn alphanumeric() -> Alphanumeric {
    Alphanumeric::new()
}
