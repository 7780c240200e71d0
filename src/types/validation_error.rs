//! The single error raised when a validation chain finishes with failures.
//!
//! [`ValidationError`] owns an ordered snapshot of every [`Failure`] recorded
//! by the chain, plus a [`StackTrace`] taken when it was built. A chain with
//! exactly one failure is reported as [`Cause::Single`], so callers can look
//! at that failure directly; two or more are reported as
//! [`Cause::Multiple`].
//!
//! # Examples
//!
//! ```
//! use arg_rail::prelude::*;
//!
//! let err = begin()
//!     .check_not_null(None::<&str>, "email")?
//!     .finish()
//!     .unwrap_err();
//!
//! match err.cause() {
//!     Cause::Single(failure) => assert_eq!(failure.kind(), FailureKind::NullArgument),
//!     Cause::Multiple(_) => unreachable!(),
//! }
//! assert_eq!(err.to_string(), "validation failed: email is null; a value must be provided");
//! # Ok::<(), UsageError>(())
//! ```
use crate::config::RailConfig;
use crate::types::error_formatter::{ErrorFormatBuilder, FormatConfig};
use crate::types::failure::Failure;
use crate::types::stack_trace::StackTrace;
use crate::types::ErrorVec;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const SINGLE_HEADER: &str = "validation failed";
const MULTIPLE_HEADER: &str = "multiple validation issues occurred";
const UNOBSERVED_SINGLE_HEADER: &str = "validation failed and was never observed";
const UNOBSERVED_MULTIPLE_HEADER: &str = "multiple validation issues occurred and were never observed";

/// How the failures inside a [`ValidationError`] are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause<'a> {
    /// Exactly one failure was recorded.
    Single(&'a Failure),
    /// Two or more failures, in the order their checks ran.
    Multiple(&'a [Failure]),
}

/// Aggregated data-validation error.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    failures: ErrorVec<Failure>,
    trace: StackTrace,
    format: FormatConfig,
    unobserved: bool,
}

impl ValidationError {
    /// Builds an error over `failures`, capturing a trace as `config` says.
    ///
    /// Returns `None` when `failures` is empty: there is nothing to report.
    #[inline(never)]
    pub fn new<I>(failures: I, config: &RailConfig) -> Option<Self>
    where
        I: IntoIterator<Item = Failure>,
    {
        let failures: ErrorVec<Failure> = failures.into_iter().collect();
        if failures.is_empty() {
            return None;
        }

        Some(Self {
            failures,
            trace: StackTrace::capture(config.trace, &config.frame_filter),
            format: config.format.clone(),
            unobserved: false,
        })
    }

    /// Builds the error reported by the lifecycle guard.
    #[inline(never)]
    pub(crate) fn unobserved(failures: ErrorVec<Failure>, config: &RailConfig) -> Option<Self> {
        Self::new(failures, config).map(|error| Self { unobserved: true, ..error })
    }

    /// Classifies the error as a single failure or a composite.
    #[inline]
    pub fn cause(&self) -> Cause<'_> {
        match self.failures.as_slice() {
            [failure] => Cause::Single(failure),
            failures => Cause::Multiple(failures),
        }
    }

    /// The failure, when exactly one was recorded.
    #[inline]
    pub fn single(&self) -> Option<&Failure> {
        match self.cause() {
            Cause::Single(failure) => Some(failure),
            Cause::Multiple(_) => None,
        }
    }

    /// All failures, in check order.
    #[inline]
    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Number of failures; never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Consumes the error, returning its failures.
    #[inline]
    pub fn into_failures(self) -> ErrorVec<Failure> {
        self.failures
    }

    /// `true` when the lifecycle guard produced this error.
    #[inline]
    pub fn is_unobserved(&self) -> bool {
        self.unobserved
    }

    /// The trace captured at construction, starting at the caller.
    #[inline]
    pub fn trace(&self) -> &StackTrace {
        &self.trace
    }

    #[inline]
    pub fn format_config(&self) -> &FormatConfig {
        &self.format
    }

    /// The leading line of the rendered message.
    pub fn header(&self) -> &'static str {
        match (self.unobserved, self.failures.len() == 1) {
            (false, true) => SINGLE_HEADER,
            (false, false) => MULTIPLE_HEADER,
            (true, true) => UNOBSERVED_SINGLE_HEADER,
            (true, false) => UNOBSERVED_MULTIPLE_HEADER,
        }
    }

    /// The combined human-readable message.
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns a builder for customizing the rendered message.
    #[must_use]
    #[inline]
    pub fn formatter(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Formats the error using a closure to configure the builder.
    #[must_use]
    pub fn format_with<F>(&self, f: F) -> String
    where
        F: FnOnce(ErrorFormatBuilder<'_>) -> ErrorFormatBuilder<'_>,
    {
        f(self.formatter()).to_string()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.formatter(), f);
        }
        Display::fmt(&self.formatter().pretty(), f)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.single().map(|failure| failure as &(dyn std::error::Error + 'static))
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a Failure;
    type IntoIter = core::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}
