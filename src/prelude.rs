//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use arg_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Entry points**: [`begin`], [`begin_with`], [`scope`], [`scope_with`]
//! - **Chain**: [`Chain`], [`Validation`], [`Gate`]
//! - **Errors**: [`Failure`], [`FailureKind`], [`UsageError`], [`Bound`], [`ValidationError`], [`Cause`], [`RailError`]
//! - **Macros**: [`failure!`]
//!
//! # Examples
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! fn transfer(amount: &str, from: Option<&str>, to: Option<&str>) -> RailResult<()> {
//!     scope(|v| {
//!         v.check_numeric(Some(amount), "amount")?
//!             .check_not_null_or_empty(from, "from")?
//!             .check_not_null_or_empty(to, "to")
//!     })
//! }
//!
//! assert!(transfer("10.50", Some("acc-1"), Some("acc-2")).is_ok());
//! assert!(transfer("ten", None, Some("acc-2")).is_err());
//! ```

// Macros
pub use crate::failure;

// Entry points
pub use crate::validation::{begin, begin_with, scope, scope_with};

// Chain
pub use crate::validation::{Chain, Gate, Validation};

// Errors
pub use crate::types::{Bound, Cause, Failure, FailureKind, UsageError, ValidationError};
pub use crate::validation::{RailError, RailResult};
