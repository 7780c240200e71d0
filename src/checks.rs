//! Pure check functions.
//!
//! Each data check returns `Ok(())` on success or the [`Failure`] describing
//! the violation; it never touches an accumulator. The chain methods on
//! [`Chain`](crate::Chain) call these after validating their own arguments
//! with [`require_name`] and [`require_bounds`].
//!
//! The functions are public so they can be reused from custom checks passed
//! to [`Chain::check_with`](crate::Chain::check_with).
//!
//! # Examples
//!
//! ```
//! use arg_rail::checks;
//! use arg_rail::FailureKind;
//!
//! assert!(checks::numeric(Some("1.5"), "ratio").is_ok());
//!
//! let failure = checks::within_range(Some(&11), "port_offset", &0, &10).unwrap_err();
//! assert_eq!(failure.kind(), FailureKind::OutOfRange);
//! ```
use crate::types::failure::Failure;
use crate::types::usage_error::{Bound, UsageError};
use core::cmp::Ordering;
use core::fmt::Display;

/// Rejects an empty subject name.
#[inline]
pub fn require_name(name: &str) -> Result<(), UsageError> {
    if name.is_empty() {
        return Err(UsageError::EmptyName);
    }
    Ok(())
}

/// Unwraps both range bounds and ensures `min <= max`.
///
/// Bounds that cannot be ordered against each other (a NaN, for instance)
/// are reported as inverted.
pub fn require_bounds<T>(min: Option<T>, max: Option<T>) -> Result<(T, T), UsageError>
where
    T: PartialOrd + Display,
{
    let min = min.ok_or(UsageError::MissingBound { bound: Bound::Min })?;
    let max = max.ok_or(UsageError::MissingBound { bound: Bound::Max })?;

    match min.partial_cmp(&max) {
        Some(Ordering::Less | Ordering::Equal) => Ok((min, max)),
        _ => Err(UsageError::InvertedBounds { min: min.to_string(), max: max.to_string() }),
    }
}

/// Fails with `NullArgument` when `value` is absent.
#[inline]
pub fn not_null<T: ?Sized>(value: Option<&T>, name: &str) -> Result<(), Failure> {
    match value {
        Some(_) => Ok(()),
        None => Err(Failure::null(name)),
    }
}

/// Fails with `NullArgument` when absent, `EmptyArgument` when `""`.
pub fn not_null_or_empty(value: Option<&str>, name: &str) -> Result<(), Failure> {
    match value {
        None => Err(Failure::null(name)),
        Some("") => Err(Failure::empty(name)),
        Some(_) => Ok(()),
    }
}

/// Fails when `value` is absent or outside `min..=max` (inclusive).
pub fn within_range<T>(value: Option<&T>, name: &str, min: &T, max: &T) -> Result<(), Failure>
where
    T: PartialOrd + Display + ?Sized,
{
    let value = value.ok_or_else(|| Failure::null(name))?;
    if min <= value && value <= max {
        Ok(())
    } else {
        Err(Failure::out_of_range(name, value, min, max))
    }
}

/// Fails unless `value` parses as an integer or a finite floating-point number.
pub fn numeric(value: Option<&str>, name: &str) -> Result<(), Failure> {
    match value {
        None => Err(Failure::null(name)),
        Some("") => Err(Failure::empty(name)),
        Some(text) if is_numeric_text(text) => Ok(()),
        Some(text) => Err(Failure::not_numeric(name, text)),
    }
}

/// Fails with `BooleanMismatch` when `value` is `false`.
#[inline]
pub fn is_true(value: bool, name: &str) -> Result<(), Failure> {
    if value {
        Ok(())
    } else {
        Err(Failure::boolean_mismatch(name, true, value))
    }
}

/// Fails with `BooleanMismatch` when `value` is `true`.
#[inline]
pub fn is_false(value: bool, name: &str) -> Result<(), Failure> {
    if value {
        Err(Failure::boolean_mismatch(name, false, value))
    } else {
        Ok(())
    }
}

/// Surrounding whitespace is ignored; infinities and NaN are not numbers here.
fn is_numeric_text(text: &str) -> bool {
    let text = text.trim();
    if text.parse::<i64>().is_ok() {
        return true;
    }
    text.parse::<f64>().is_ok_and(f64::is_finite)
}
