//! Failure descriptors, usage errors and the aggregated validation error.
//!
//! # Examples
//!
//! ```
//! use arg_rail::{Failure, FailureKind, UsageError};
//!
//! let failure = Failure::boolean_mismatch("terms_accepted", true, false);
//! assert_eq!(failure.kind(), FailureKind::BooleanMismatch);
//! assert_eq!(failure.message(), "terms_accepted must be true, but was false");
//!
//! assert_eq!(UsageError::EmptyName.to_string(), "name is empty; a value must be provided");
//! ```
use smallvec::SmallVec;

pub mod error_formatter;
pub mod failure;
pub mod stack_trace;
pub mod usage_error;
pub mod validation_error;

pub use error_formatter::{ErrorFormatBuilder, FailureFormatter, FormatConfig};
pub use failure::*;
pub use stack_trace::*;
pub use usage_error::*;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating failures.
///
/// Uses inline storage for one element, so the common single-failure chain
/// never allocates for the collection itself.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
