//! Fluent argument validation that reports every failure at once.
//!
//! A chain starts with [`begin`], runs checks that record failures instead of
//! returning early, and ends with [`Validation::finish`], which raises a single
//! [`ValidationError`] carrying all of them. Misusing the API itself (an empty
//! subject name, inverted range bounds) is a different class of error,
//! [`UsageError`], returned immediately by the offending call.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `arg_rail::*`, use [`prelude`], or pick focused pieces.
//!
//! # Examples
//!
//! ## Accumulating failures
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! let err = begin()
//!     .check_not_null(None::<&str>, "username")?
//!     .check_within_range(200, "age", 0, 130)?
//!     .check_numeric(Some("12"), "zip")?
//!     .finish()
//!     .unwrap_err();
//!
//! let kinds: Vec<_> = err.iter().map(Failure::kind).collect();
//! assert_eq!(kinds, [FailureKind::NullArgument, FailureKind::OutOfRange]);
//! # Ok::<(), UsageError>(())
//! ```
//!
//! ## Conditional checks
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! let remote = false;
//! begin()
//!     .gate_on(remote)
//!     .check_not_null_or_empty(None, "url")?
//!     .finish()
//!     .expect("skipped");
//! # Ok::<(), UsageError>(())
//! ```
//!
//! ## Usage errors are not accumulated
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! let err = begin().check_within_range(5, "level", 10, 0).unwrap_err();
//! assert!(matches!(err, UsageError::InvertedBounds { .. }));
//! ```
//!
//! # Lifecycle
//!
//! A [`Validation`] that holds failures must be finished. Dropping the last
//! handle of an unfinished chain with pending failures panics with the
//! aggregated message; [`scope`] finishes the chain for you.
//!
//! # Traces
//!
//! The default [`RailConfig`] captures a [`StackTrace`] only when
//! `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it, so with a plain
//! environment the trace of a [`ValidationError`] is usually empty. Use
//! [`RailConfig::forced_trace`] with [`begin_with`] to always capture one.
//!
//! ```
//! use arg_rail::prelude::*;
//! use arg_rail::{RailConfig, TraceCapture, TraceStatus};
//!
//! assert_eq!(RailConfig::default().trace, TraceCapture::Env);
//!
//! let err = begin_with(RailConfig::forced_trace())
//!     .check_true(false, "accepted")?
//!     .finish()
//!     .unwrap_err();
//! assert_eq!(err.trace().status(), TraceStatus::Captured);
//! # Ok::<(), UsageError>(())
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for failures, traces and errors
//! - `tracing` - debug events for recorded failures and finished chains,
//!   an error event when the lifecycle guard fires

/// Pure check functions used by the chain
pub mod checks;
/// Per-chain configuration
pub mod config;
/// Convenience macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure descriptors and error types
pub mod types;
/// The validation chain, gates and scoped validation
pub mod validation;

pub use config::RailConfig;
pub use types::{
    Bound, Cause, ErrorFormatBuilder, ErrorVec, Failure, FailureFormatter, FailureKind,
    FormatConfig, Frame, FrameFilter, StackTrace, TraceCapture, TraceStatus, UsageError,
    ValidationError,
};
pub use validation::*;
