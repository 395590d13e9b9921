//! Candidate values and the `AsCandidate` conversion trait
//!
//! A host framework hands checks values of arbitrary type. [`Candidate`] is the
//! closed set of shapes a check can reason about; [`AsCandidate`] turns a concrete
//! Rust value into one of them. `None` stands for a null value.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// CANDIDATE
// ============================================================================

/// A borrowed value in one of the shapes understood by the checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidate<'a> {
    /// Textual value.
    Text(&'a str),
    /// Single character.
    Char(char),
    /// Numeric value, compared through its own textual rendering.
    Number(Number<'a>),
    /// Enumerated value, compared through its symbolic name.
    Label {
        /// Symbolic name of the variant, e.g. `"Active"`.
        name: &'a str,
        /// Name of the enum type.
        type_name: &'static str,
    },
    /// Any other value. Always rejected with a usage error.
    Opaque {
        /// Name of the value's type.
        type_name: &'static str,
    },
}

/// Shape of a supported [`Candidate`], used by checks to declare what they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Text,
    Char,
    Number,
    Label,
}

impl Candidate<'static> {
    /// Builds a label candidate from an enumerated value.
    pub fn label<T: EnumLabel + ?Sized>(value: &T) -> Candidate<'static> {
        Candidate::Label {
            name: value.label(),
            type_name: type_name::<T>(),
        }
    }

    /// Builds an opaque candidate for a value of an unsupported type.
    pub fn opaque<T: ?Sized>(_value: &T) -> Candidate<'static> {
        Candidate::Opaque {
            type_name: type_name::<T>(),
        }
    }
}

impl Candidate<'_> {
    /// Returns the shape of this candidate, or `None` for opaque values.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        match self {
            Self::Text(_) => Some(Shape::Text),
            Self::Char(_) => Some(Shape::Char),
            Self::Number(_) => Some(Shape::Number),
            Self::Label { .. } => Some(Shape::Label),
            Self::Opaque { .. } => None,
        }
    }

    /// Returns the runtime type name reported in usage errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "str",
            Self::Char(_) => "char",
            Self::Number(n) => n.type_name(),
            Self::Label { type_name, .. } | Self::Opaque { type_name } => type_name,
        }
    }
}

// ============================================================================
// NUMBER
// ============================================================================

/// A numeric candidate that remembers its source type.
///
/// Rendering goes through the source type's own `Display`: `42_i32` is `"42"`,
/// `0.5_f32` is `"0.5"`, `42.0_f64` is `"42"`, and a JSON number keeps the text
/// serde_json produces for it (`42.0` stays `"42.0"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number<'a> {
    repr: NumberRepr<'a>,
    type_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum NumberRepr<'a> {
    Signed(i128),
    Unsigned(u128),
    F32(f32),
    F64(f64),
    Json(&'a serde_json::Number),
}

impl Number<'_> {
    /// Name of the numeric source type, e.g. `"u8"` or `"number"` for JSON.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for Number<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            NumberRepr::Signed(v) => fmt::Display::fmt(&v, f),
            NumberRepr::Unsigned(v) => fmt::Display::fmt(&v, f),
            NumberRepr::F32(v) => fmt::Display::fmt(&v, f),
            NumberRepr::F64(v) => fmt::Display::fmt(&v, f),
            NumberRepr::Json(v) => fmt::Display::fmt(v, f),
        }
    }
}

macro_rules! impl_number {
    ($($t:ty => $variant:ident($v:ident) $conv:expr),+ $(,)?) => {
        $(
            impl From<$t> for Number<'static> {
                #[inline]
                fn from($v: $t) -> Self {
                    Number {
                        repr: NumberRepr::$variant($conv),
                        type_name: stringify!($t),
                    }
                }
            }

            impl AsCandidate for $t {
                #[inline]
                fn as_candidate(&self) -> Option<Candidate<'_>> {
                    Some(Candidate::Number(Number::from(*self)))
                }
            }
        )+
    };
}

impl_number! {
    i8 => Signed(v) i128::from(v),
    i16 => Signed(v) i128::from(v),
    i32 => Signed(v) i128::from(v),
    i64 => Signed(v) i128::from(v),
    i128 => Signed(v) v,
    isize => Signed(v) v as i128,
    u8 => Unsigned(v) u128::from(v),
    u16 => Unsigned(v) u128::from(v),
    u32 => Unsigned(v) u128::from(v),
    u64 => Unsigned(v) u128::from(v),
    u128 => Unsigned(v) v,
    usize => Unsigned(v) v as u128,
    f32 => F32(v) v,
    f64 => F64(v) v,
}

impl<'a> From<&'a serde_json::Number> for Number<'a> {
    fn from(value: &'a serde_json::Number) -> Self {
        Number {
            repr: NumberRepr::Json(value),
            type_name: "number",
        }
    }
}

// ============================================================================
// ENUM LABELS
// ============================================================================

/// Enumerated types that expose a stable symbolic name per variant.
///
/// The label is what checks compare, never a `Display` rendering. Use the
/// [`enum_label!`](crate::enum_label) macro to derive it from variant names.
pub trait EnumLabel {
    /// Symbolic name of this variant.
    fn label(&self) -> &'static str;
}

// ============================================================================
// AS CANDIDATE
// ============================================================================

/// Conversion of a concrete value into a [`Candidate`].
///
/// Returns `None` when the value is null.
pub trait AsCandidate {
    fn as_candidate(&self) -> Option<Candidate<'_>>;
}

impl AsCandidate for str {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Text(self))
    }
}

impl AsCandidate for String {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Text(self.as_str()))
    }
}

impl AsCandidate for Box<str> {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Text(self))
    }
}

impl AsCandidate for Cow<'_, str> {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Text(self.as_ref()))
    }
}

impl AsCandidate for char {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Char(*self))
    }
}

impl<T: AsCandidate> AsCandidate for Option<T> {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        self.as_ref().and_then(AsCandidate::as_candidate)
    }
}

impl<T: AsCandidate + ?Sized> AsCandidate for &T {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        (**self).as_candidate()
    }
}

impl AsCandidate for Candidate<'_> {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(*self)
    }
}

/// JSON values map `null` to null, strings to text, numbers to numbers, and
/// every other kind to an opaque value named after the JSON kind.
impl AsCandidate for serde_json::Value {
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        use serde_json::Value;

        match self {
            Value::Null => None,
            Value::String(s) => Some(Candidate::Text(s)),
            Value::Number(n) => Some(Candidate::Number(Number::from(n))),
            Value::Bool(_) => Some(Candidate::Opaque { type_name: "bool" }),
            Value::Array(_) => Some(Candidate::Opaque { type_name: "array" }),
            Value::Object(_) => Some(Candidate::Opaque { type_name: "object" }),
        }
    }
}

/// Wraps a value of a type no check supports.
///
/// # Examples
///
/// ```rust
/// use validation_ext::prelude::*;
///
/// struct Widget;
///
/// let err = alphanumeric().check(&Opaque::of(&Widget)).unwrap_err();
/// assert!(err.to_string().ends_with("Widget type"));
/// ```
pub struct Opaque<'a, T: ?Sized> {
    _value: PhantomData<&'a T>,
}

impl<'a, T: ?Sized> Opaque<'a, T> {
    /// Wraps `value`; only its type is observed.
    #[must_use]
    pub fn of(_value: &'a T) -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized> AsCandidate for Opaque<'_, T> {
    #[inline]
    fn as_candidate(&self) -> Option<Candidate<'_>> {
        Some(Candidate::Opaque {
            type_name: type_name::<T>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    enum Flag {
        On,
    }

    impl EnumLabel for Flag {
        fn label(&self) -> &'static str {
            match self {
                Self::On => "On",
            }
        }
    }

    #[test]
    fn test_text_sources() {
        assert_eq!("abc".as_candidate(), Some(Candidate::Text("abc")));
        assert_eq!(String::from("abc").as_candidate(), Some(Candidate::Text("abc")));
        assert_eq!(Cow::Borrowed("abc").as_candidate(), Some(Candidate::Text("abc")));
        assert_eq!('x'.as_candidate(), Some(Candidate::Char('x')));
    }

    #[test]
    fn test_option_none_is_null() {
        assert_eq!(None::<String>.as_candidate(), None);
        assert_eq!(Some("a").as_candidate(), Some(Candidate::Text("a")));
    }

    #[test]
    fn test_number_rendering_uses_display() {
        assert_eq!(Number::from(42_i32).to_string(), "42");
        assert_eq!(Number::from(-7_i8).to_string(), "-7");
        assert_eq!(Number::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(Number::from(0.5_f32).to_string(), "0.5");
        assert_eq!(Number::from(0.1_f32).to_string(), "0.1");
        assert_eq!(Number::from(42.0_f64).to_string(), "42");
        assert_eq!(Number::from(42_u8).type_name(), "u8");
    }

    #[test]
    fn test_json_number_keeps_its_rendering() {
        let value = json!(42.0);
        let Some(Candidate::Number(n)) = value.as_candidate() else {
            panic!("expected a number candidate");
        };
        assert_eq!(n.to_string(), "42.0");
        assert_eq!(n.type_name(), "number");
    }

    #[test]
    fn test_json_kinds() {
        assert_eq!(json!(null).as_candidate(), None);
        assert_eq!(json!("a").as_candidate(), Some(Candidate::Text("a")));
        assert_eq!(json!(true).as_candidate().map(|c| c.type_name()), Some("bool"));
        assert_eq!(json!([1]).as_candidate().map(|c| c.type_name()), Some("array"));
        assert_eq!(json!({}).as_candidate().map(|c| c.type_name()), Some("object"));
    }

    #[test]
    fn test_label_candidate() {
        let candidate = Candidate::label(&Flag::On);
        assert_eq!(candidate.shape(), Some(Shape::Label));
        assert!(matches!(candidate, Candidate::Label { name: "On", .. }));
        assert!(candidate.type_name().ends_with("Flag"));
    }

    #[test]
    fn test_opaque_has_no_shape() {
        struct Widget;
        let candidate = Candidate::opaque(&Widget);
        assert_eq!(candidate.shape(), None);
        assert!(candidate.type_name().ends_with("Widget"));
        assert_eq!(Opaque::of(&Widget).as_candidate(), Some(candidate));
    }
}
