//! # validation-ext
//!
//! Two declarative constraint checks for validation frameworks:
//!
//! - [`Alphanumeric`](validators::Alphanumeric): only ASCII letters and digits remain
//!   after removing a configured ignore-set;
//! - [`OneOf`](validators::OneOf): the value's textual form is in an allow-list,
//!   optionally ignoring ASCII case.
//!
//! ## Quick Start
//!
//! ```rust
//! use validation_ext::prelude::*;
//!
//! let username = alphanumeric().ignore_chars("_");
//! assert_eq!(username.check("alice_42"), Ok(true));
//! assert_eq!(username.check("alice!"), Ok(false));
//!
//! // Null is always valid; presence is a separate rule.
//! assert_eq!(username.check(None::<&str>), Ok(true));
//!
//! // Applying a check to a shape it does not support is a usage error.
//! let err = username.check(42).unwrap_err();
//! assert_eq!(err.to_string(), "Alphanumeric not supported for i32 type");
//! ```
//!
//! ## Configuration
//!
//! Checks are built once with [`Configure::configure`](foundation::Configure) from
//! serde-friendly options and are immutable and `Send + Sync` afterwards:
//!
//! ```rust
//! use validation_ext::prelude::*;
//!
//! let options: OneOfOptions =
//!     serde_json::from_str(r#"{ "values": ["A", "B", "C"], "ignoreCase": true }"#).unwrap();
//! let grade = OneOf::configure(options);
//! assert_eq!(grade.check("b"), Ok(true));
//! ```

pub mod foundation;
mod macros;
pub mod prelude;
pub mod validators;
