use crate::config::RailConfig;
use crate::types::{UsageError, ValidationError};
use crate::validation::core::Validation;
use core::fmt::{self, Display};

/// Either class of error a scoped validation can end with.
///
/// The two classes stay distinct: a [`UsageError`] means the calling code
/// misused the API, a [`ValidationError`] means the data failed its checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RailError {
    Usage(UsageError),
    Invalid(ValidationError),
}

impl RailError {
    #[inline]
    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            Self::Usage(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }

    #[inline]
    pub fn as_invalid(&self) -> Option<&ValidationError> {
        match self {
            Self::Usage(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl Display for RailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(err) => write!(f, "validation API misuse: {err}"),
            Self::Invalid(err) => Display::fmt(err, f),
        }
    }
}

impl std::error::Error for RailError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<UsageError> for RailError {
    #[inline]
    fn from(err: UsageError) -> Self {
        Self::Usage(err)
    }
}

impl From<ValidationError> for RailError {
    #[inline]
    fn from(err: ValidationError) -> Self {
        Self::Invalid(err)
    }
}

/// Result alias for scoped validations.
pub type RailResult<T> = Result<T, RailError>;

/// Runs a validation chain that is always finished when the closure returns.
///
/// This is the guaranteed-finish way to validate: the chain cannot be
/// forgotten, so the drop-time guard on [`Validation`] never has to fire.
/// If the closure returns a [`UsageError`], any failures recorded before it
/// are discarded and the usage error is returned.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let port = 70_000;
/// let result = scope(|v| {
///     v.check_within_range(port, "port", 1, 65_535)?
///         .check_not_null_or_empty(Some("localhost"), "host")
/// });
///
/// let err = result.unwrap_err();
/// assert_eq!(err.as_invalid().map(ValidationError::len), Some(1));
/// ```
#[inline(never)]
pub fn scope<F>(f: F) -> RailResult<()>
where
    F: FnOnce(Validation) -> Result<Validation, UsageError>,
{
    scope_with(RailConfig::default(), f)
}

/// [`scope`] with a caller-supplied configuration.
#[inline(never)]
pub fn scope_with<F>(config: RailConfig, f: F) -> RailResult<()>
where
    F: FnOnce(Validation) -> Result<Validation, UsageError>,
{
    let handle = Validation::with_config(config);

    match f(handle.clone()) {
        Ok(returned) => {
            if !returned.ptr_eq(&handle) {
                for failure in returned.failures() {
                    handle.record(failure);
                }
                returned.mark_observed();
            }
            handle.finish().map_err(RailError::Invalid)
        },
        Err(usage) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(discarded = handle.len(), error = %usage, "scoped validation misused");
            handle.mark_observed();
            Err(RailError::Usage(usage))
        },
    }
}
