//! Convenience macros.
//!
//! - [`macro@crate::failure`] - builds a [`Failure`](crate::Failure) of kind
//!   `Custom` with a formatted message, for checks passed to
//!   [`Chain::check_with`](crate::Chain::check_with).

/// Creates a `Custom` [`Failure`](crate::Failure) for `name` with a formatted message.
///
/// # Arguments
///
/// * `$name` - The subject name, anything convertible into `String`
/// * the rest - Same arguments as the standard `format!` macro
///
/// # Examples
///
/// ```
/// use arg_rail::{failure, FailureKind};
///
/// let limit = 10;
/// let f = failure!("batch_size", "batch_size must not exceed {}", limit);
///
/// assert_eq!(f.kind(), FailureKind::Custom);
/// assert_eq!(f.name(), "batch_size");
/// assert_eq!(f.message(), "batch_size must not exceed 10");
/// ```
#[macro_export]
macro_rules! failure {
    ($name:expr, $($arg:tt)+) => {
        $crate::types::Failure::custom($name, format!($($arg)+))
    };
}
