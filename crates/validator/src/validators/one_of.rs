//! One-of check
//!
//! A value passes when its canonical string is a member of the configured
//! allow-list. Text, single characters, numbers and enum labels are supported.
//!
//! Case-insensitive matching folds ASCII letters only, so results do not depend
//! on the platform locale.

use std::collections::HashSet;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::foundation::{
    Candidate, CheckResult, Coercion, Configure, Constraint, Shape, ValidationError,
};

const COERCION: Coercion = Coercion::new(
    OneOf::NAME,
    &[Shape::Text, Shape::Char, Shape::Number, Shape::Label],
);

/// Declaration options for [`OneOf`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OneOfOptions {
    /// Allowed values. Required, may be empty.
    pub values: Vec<String>,

    /// Compare ASCII letters without regard to case.
    #[serde(default, alias = "ignoreCase")]
    pub ignore_case: bool,
}

/// Validates that a value is one of an allow-list.
///
/// Numbers compare through their own `Display` rendering, enums through their
/// symbolic [`label`](crate::foundation::EnumLabel::label).
///
/// # Examples
///
/// ```rust
/// use validation_ext::prelude::*;
///
/// let grade = one_of(["A", "B", "C"]);
/// assert_eq!(grade.check("A"), Ok(true));
/// assert_eq!(grade.check("a"), Ok(false));
/// assert_eq!(grade.ignore_case(true).check("a"), Ok(true));
///
/// assert_eq!(one_of(["42"]).check(42), Ok(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneOf {
    values: IndexSet<String>,
    // Present only when matching ignores case.
    folded: Option<HashSet<String>>,
}

impl OneOf {
    /// Name reported in usage errors.
    pub const NAME: &'static str = "OneOf";

    /// Creates a case-sensitive check over `values`.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            folded: None,
        }
    }

    /// Enables or disables case-insensitive matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.folded = ignore_case.then(|| {
            self.values
                .iter()
                .map(|v| v.to_ascii_lowercase())
                .collect()
        });
        self
    }

    /// Returns true if matching ignores case.
    pub fn is_ignore_case(&self) -> bool {
        self.folded.is_some()
    }

    /// Allowed values in declaration order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Returns true if `text` matches an allowed value under the configured case rule.
    pub fn contains(&self, text: &str) -> bool {
        if self.values.contains(text) {
            return true;
        }

        match &self.folded {
            Some(folded) => folded.contains(&text.to_ascii_lowercase()),
            None => false,
        }
    }

    fn joined(&self) -> String {
        self.values().collect::<Vec<_>>().join(", ")
    }
}

impl Configure for OneOf {
    type Options = OneOfOptions;

    fn configure(options: OneOfOptions) -> Self {
        let check = Self::new(options.values).ignore_case(options.ignore_case);
        tracing::debug!(
            check = Self::NAME,
            values = check.values.len(),
            ignore_case = check.is_ignore_case(),
            "configured constraint"
        );
        check
    }
}

impl Constraint for OneOf {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn is_valid(&self, candidate: Option<Candidate<'_>>) -> CheckResult {
        let Some(candidate) = candidate else {
            return Ok(true);
        };

        let text = COERCION.coerce(&candidate)?;
        Ok(self.contains(&text))
    }

    fn violation(&self) -> ValidationError {
        let joined = self.joined();
        ValidationError::new("one_of", format!("must be one of [{joined}]"))
            .with_param("values", joined)
            .with_param("ignore_case", self.is_ignore_case().to_string())
    }
}

/// Creates a case-sensitive one-of check.
pub fn one_of<I, S>(values: I) -> OneOf
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOf::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{EnumLabel, UnsupportedTypeError};

    #[derive(Debug)]
    enum Grade {
        A,
    }

    impl EnumLabel for Grade {
        fn label(&self) -> &'static str {
            match self {
                Self::A => "A",
            }
        }
    }

    #[test]
    fn test_membership() {
        let validator = one_of(["A", "B", "C"]);
        assert_eq!(validator.check("A"), Ok(true));
        assert_eq!(validator.check("X"), Ok(false));
        assert_eq!(validator.check("a"), Ok(false));
        assert_eq!(validator.check(None::<&str>), Ok(true));
    }

    #[test]
    fn test_ignore_case() {
        let validator = one_of(["A", "B", "C"]).ignore_case(true);
        assert!(validator.is_ignore_case());
        assert_eq!(validator.check("a"), Ok(true));
        assert_eq!(validator.check("A"), Ok(true));
        assert_eq!(validator.check("x"), Ok(false));
    }

    #[test]
    fn test_ignore_case_can_be_turned_off() {
        let validator = one_of(["A"]).ignore_case(true).ignore_case(false);
        assert!(!validator.is_ignore_case());
        assert_eq!(validator.check("a"), Ok(false));
    }

    #[test]
    fn test_folding_is_ascii_only() {
        let validator = one_of(["STRASSE", "ÉTÉ"]).ignore_case(true);
        assert_eq!(validator.check("strasse"), Ok(true));
        assert_eq!(validator.check("straße"), Ok(false));
        assert_eq!(validator.check("été"), Ok(false));
        assert_eq!(validator.check("ÉtÉ"), Ok(true));
    }

    #[test]
    fn test_empty_allow_list() {
        let validator = one_of(Vec::<String>::new());
        assert_eq!(validator.check("anything"), Ok(false));
        assert_eq!(validator.check(""), Ok(false));
        assert_eq!(validator.is_valid(None), Ok(true));
    }

    #[test]
    fn test_numbers_and_chars() {
        assert_eq!(one_of(["42"]).check(42), Ok(true));
        assert_eq!(one_of(["42"]).check(42_u64), Ok(true));
        assert_eq!(one_of(["42"]).check(43), Ok(false));
        assert_eq!(one_of(["0.5"]).check(0.5_f64), Ok(true));
        assert_eq!(one_of(["x"]).check('x'), Ok(true));
    }

    #[test]
    fn test_enum_label() {
        let validator = one_of(["A"]);
        assert_eq!(validator.is_valid(Some(Candidate::label(&Grade::A))), Ok(true));

        let lower = one_of(["a"]);
        assert_eq!(lower.is_valid(Some(Candidate::label(&Grade::A))), Ok(false));
        let lower = lower.ignore_case(true);
        assert_eq!(lower.is_valid(Some(Candidate::label(&Grade::A))), Ok(true));
    }

    #[test]
    fn test_opaque_is_unsupported() {
        let err = one_of(["A"])
            .is_valid(Some(Candidate::Opaque { type_name: "bool" }))
            .unwrap_err();
        assert_eq!(err, UnsupportedTypeError::new("OneOf", "bool"));
        assert_eq!(err.to_string(), "OneOf not supported for bool type");
    }

    #[test]
    fn test_values_keep_declaration_order() {
        let validator = one_of(["C", "A", "B", "A"]);
        assert_eq!(validator.values().collect::<Vec<_>>(), ["C", "A", "B"]);

        let error = validator.violation();
        assert_eq!(error.code, "one_of");
        assert_eq!(error.message, "must be one of [C, A, B]");
        assert_eq!(error.param("values"), Some("C, A, B"));
        assert_eq!(error.param("ignore_case"), Some("false"));
    }

    #[test]
    fn test_configure_from_options() {
        let validator = OneOf::configure(OneOfOptions {
            values: vec!["on".into(), "off".into()],
            ignore_case: true,
        });
        assert_eq!(validator.check("ON"), Ok(true));
        assert_eq!(validator.check("auto"), Ok(false));
    }
}
