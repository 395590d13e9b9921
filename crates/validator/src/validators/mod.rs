//! Built-in checks
//!
//! - [`Alphanumeric`]: ASCII letters and digits only, after removing an ignore-set
//! - [`OneOf`]: membership in an allow-list, optionally ignoring ASCII case
//!
//! # Examples
//!
//! ```rust
//! use validation_ext::prelude::*;
//!
//! let sku = alphanumeric().ignore_chars("-");
//! let size = one_of(["S", "M", "L"]).ignore_case(true);
//!
//! assert_eq!(sku.check("AB-1234"), Ok(true));
//! assert_eq!(size.check("m"), Ok(true));
//! ```

pub mod alphanumeric;
pub mod one_of;

pub use alphanumeric::{Alphanumeric, AlphanumericOptions, alphanumeric};
pub use one_of::{OneOf, OneOfOptions, one_of};
