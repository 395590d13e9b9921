//! Prelude module for convenient imports.
//!
//! ```rust
//! use validation_ext::prelude::*;
//!
//! let code = alphanumeric().ignore_chars("-_");
//! let status = one_of(["OPEN", "CLOSED"]).ignore_case(true);
//! assert_eq!(code.check("a_1"), Ok(true));
//! assert_eq!(status.check("open"), Ok(true));
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, errors
// ============================================================================

pub use crate::foundation::{
    AsCandidate, Candidate, CheckError, Configure, Constraint, EnumLabel, Number, Opaque,
    UnsupportedTypeError, ValidationError, ValidationErrors, validate_with_all,
};

// ============================================================================
// VALIDATORS: Built-in checks
// ============================================================================

pub use crate::validators::{
    Alphanumeric, AlphanumericOptions, OneOf, OneOfOptions, alphanumeric, one_of,
};
