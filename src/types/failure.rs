//! Data-validation failure descriptors.
//!
//! A [`Failure`] records one violated check: what kind of check failed, which
//! argument it was about, and a rendered message. Failures are appended to a
//! [`Validation`](crate::validation::Validation) and only surface once the
//! chain is finished.
//!
//! # Examples
//!
//! ```
//! use arg_rail::{Failure, FailureKind};
//!
//! let failure = Failure::null("user_id");
//! assert_eq!(failure.kind(), FailureKind::NullArgument);
//! assert_eq!(failure.name(), "user_id");
//! assert_eq!(failure.to_string(), "user_id is null; a value must be provided");
//! ```
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classifies which check produced a [`Failure`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FailureKind {
    /// The value was absent.
    NullArgument,
    /// The value was present but empty.
    EmptyArgument,
    /// The value fell outside the accepted range.
    OutOfRange,
    /// The value was not a numeric string.
    NotNumeric,
    /// A boolean value or expression had the wrong truth value.
    BooleanMismatch,
    /// Produced by a caller-supplied check.
    Custom,
}

impl FailureKind {
    /// Returns the kind's name as used in rendered messages.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NullArgument => "NullArgument",
            Self::EmptyArgument => "EmptyArgument",
            Self::OutOfRange => "OutOfRange",
            Self::NotNumeric => "NotNumeric",
            Self::BooleanMismatch => "BooleanMismatch",
            Self::Custom => "Custom",
        }
    }
}

impl Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded data-validation violation.
///
/// Immutable once created; the constructors render the message up front so
/// that an aggregated error can be displayed without access to the checked
/// values.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    kind: FailureKind,
    name: String,
    message: String,
}

impl Failure {
    /// Creates a failure from its raw parts.
    #[inline]
    pub fn new(kind: FailureKind, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, name: name.into(), message: message.into() }
    }

    /// `name` was absent.
    pub fn null(name: &str) -> Self {
        Self::new(FailureKind::NullArgument, name, format!("{name} is null; a value must be provided"))
    }

    /// `name` was present but empty.
    pub fn empty(name: &str) -> Self {
        Self::new(
            FailureKind::EmptyArgument,
            name,
            format!("{name} is empty; a value must be provided"),
        )
    }

    /// `name` held `value`, which is outside `min..=max`.
    pub fn out_of_range<T: Display + ?Sized>(name: &str, value: &T, min: &T, max: &T) -> Self {
        Self::new(
            FailureKind::OutOfRange,
            name,
            format!(
                "{name}'s value of \"{value}\" is out of range; must be a value from \"{min}\" to \"{max}\""
            ),
        )
    }

    /// `name` held `value`, which does not parse as a number.
    pub fn not_numeric(name: &str, value: &str) -> Self {
        Self::new(
            FailureKind::NotNumeric,
            name,
            format!("{name} must be a numeric string; actual value is \"{value}\""),
        )
    }

    /// `name` evaluated to `actual` where `expected` was required.
    pub fn boolean_mismatch(name: &str, expected: bool, actual: bool) -> Self {
        Self::new(
            FailureKind::BooleanMismatch,
            name,
            format!("{name} must be {expected}, but was {actual}"),
        )
    }

    /// A failure reported by a caller-supplied check.
    #[inline]
    pub fn custom(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Custom, name, message)
    }

    #[inline]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The subject name the failing check was given.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Failure {}
