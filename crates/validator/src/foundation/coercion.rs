//! Canonical string form of a candidate
//!
//! Each check owns a [`Coercion`] listing the shapes it accepts. Coercion turns an
//! accepted candidate into the string the check compares, and rejects everything
//! else with [`UnsupportedTypeError`]. It is never called for null values.

use std::borrow::Cow;

use crate::foundation::{Candidate, Shape, UnsupportedTypeError};

/// Converts candidates into their canonical string form on behalf of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coercion {
    check: &'static str,
    accepts: &'static [Shape],
}

impl Coercion {
    /// Creates a coercion for `check` that accepts the listed shapes.
    #[must_use]
    pub const fn new(check: &'static str, accepts: &'static [Shape]) -> Self {
        Self { check, accepts }
    }

    /// Name of the owning check, used in usage errors.
    #[must_use]
    pub fn check(&self) -> &'static str {
        self.check
    }

    /// Returns true if `shape` is accepted.
    #[must_use]
    pub fn accepts(&self, shape: Shape) -> bool {
        self.accepts.contains(&shape)
    }

    /// Returns the canonical string for `candidate`.
    ///
    /// - text: the text itself
    /// - char: a one-character string
    /// - number: the number's own `Display` rendering
    /// - label: the symbolic name
    pub fn coerce<'a>(
        &self,
        candidate: &Candidate<'a>,
    ) -> Result<Cow<'a, str>, UnsupportedTypeError> {
        match *candidate {
            Candidate::Text(text) if self.accepts(Shape::Text) => Ok(Cow::Borrowed(text)),
            Candidate::Char(c) if self.accepts(Shape::Char) => Ok(Cow::Owned(c.to_string())),
            Candidate::Number(n) if self.accepts(Shape::Number) => Ok(Cow::Owned(n.to_string())),
            Candidate::Label { name, .. } if self.accepts(Shape::Label) => Ok(Cow::Borrowed(name)),
            _ => {
                let type_name = candidate.type_name();
                tracing::warn!(
                    check = self.check,
                    type_name,
                    "constraint applied to an unsupported value type"
                );
                Err(UnsupportedTypeError::new(self.check, type_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{EnumLabel, Number};

    const TEXTUAL: Coercion = Coercion::new("Textual", &[Shape::Text, Shape::Char]);
    const ANY: Coercion = Coercion::new(
        "Any",
        &[Shape::Text, Shape::Char, Shape::Number, Shape::Label],
    );

    struct Level;

    impl EnumLabel for Level {
        fn label(&self) -> &'static str {
            "High"
        }
    }

    #[test]
    fn test_text_is_borrowed() {
        let text = TEXTUAL.coerce(&Candidate::Text("abc")).unwrap();
        assert!(matches!(text, Cow::Borrowed("abc")));
    }

    #[test]
    fn test_char_becomes_one_char_string() {
        assert_eq!(TEXTUAL.coerce(&Candidate::Char('z')).unwrap(), "z");
    }

    #[test]
    fn test_number_and_label() {
        let number = Candidate::Number(Number::from(42_i64));
        assert_eq!(ANY.coerce(&number).unwrap(), "42");
        assert_eq!(ANY.coerce(&Candidate::label(&Level)).unwrap(), "High");
    }

    #[test]
    fn test_rejected_shape_reports_type() {
        let err = TEXTUAL
            .coerce(&Candidate::Number(Number::from(7_u16)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Textual not supported for u16 type");
    }

    #[test]
    fn test_opaque_is_always_rejected() {
        let err = ANY
            .coerce(&Candidate::Opaque { type_name: "object" })
            .unwrap_err();
        assert_eq!(err, UnsupportedTypeError::new("Any", "object"));
    }
}
