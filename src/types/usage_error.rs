//! Errors raised when the validation API itself is misused.
//!
//! These are never accumulated: a check that receives an empty subject name
//! or broken range bounds returns [`UsageError`] straight away, because the
//! calling code is wrong rather than the data it is checking.
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which end of a range a [`UsageError::MissingBound`] refers to.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Min,
    Max,
}

impl Bound {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contract violation by the caller of a check.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let err = begin().check_true(true, "").unwrap_err();
/// assert_eq!(err, UsageError::EmptyName);
/// ```
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UsageError {
    /// The subject name passed to a check was empty.
    EmptyName,
    /// A range check was given no value for one of its bounds.
    MissingBound { bound: Bound },
    /// A range check was given `min > max`, or bounds that do not compare.
    InvertedBounds { min: String, max: String },
}

impl Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("name is empty; a value must be provided"),
            Self::MissingBound { bound } => write!(f, "{bound} is null; a value must be provided"),
            Self::InvertedBounds { min, max } => {
                write!(f, "min must be equal to or less than max (min: \"{min}\", max: \"{max}\")")
            },
        }
    }
}

impl std::error::Error for UsageError {}
