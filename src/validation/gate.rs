use crate::checks::require_name;
use crate::types::{Failure, UsageError};
use crate::validation::core::Validation;

/// A validation chain paired with the decision to run or skip the next check.
///
/// Produced by [`Chain::gate_on`](crate::Chain::gate_on). A check invoked on
/// an [`Active`](Gate::Active) gate runs exactly as it would on the bare
/// accumulator; on a [`Skipped`](Gate::Skipped) gate it is not evaluated at
/// all (its arguments are not even validated) and the accumulator is handed
/// back untouched. Either way the check returns a bare [`Validation`], so
/// the gate covers a single check. Use [`Gate::apply`] to gate a sub-chain.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let has_discount = false;
/// let discount: Option<u8> = None;
///
/// begin()
///     .gate_on(has_discount)
///     .check_not_null(discount, "discount")?
///     .finish()
///     .expect("gated check was skipped");
/// # Ok::<(), UsageError>(())
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub enum Gate {
    Active(Validation),
    Skipped(Validation),
}

impl Gate {
    #[inline]
    pub fn new(validation: Validation, condition: bool) -> Self {
        if condition {
            Self::Active(validation)
        } else {
            Self::Skipped(validation)
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    #[inline]
    pub fn is_skipped(&self) -> bool {
        !self.is_active()
    }

    #[inline]
    pub fn validation(&self) -> &Validation {
        match self {
            Self::Active(validation) | Self::Skipped(validation) => validation,
        }
    }

    /// Drops the routing decision and returns the accumulator.
    #[inline]
    pub fn into_validation(self) -> Validation {
        match self {
            Self::Active(validation) | Self::Skipped(validation) => validation,
        }
    }

    /// Runs a whole sub-chain when active; hands the accumulator back otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_rail::prelude::*;
    ///
    /// let ship = true;
    /// let validation = begin().gate_on(ship).apply(|v| {
    ///     v.check_not_null_or_empty(Some(""), "street")?
    ///         .check_numeric(Some("7a"), "zip")
    /// })?;
    ///
    /// assert_eq!(validation.finish().unwrap_err().len(), 2);
    /// # Ok::<(), UsageError>(())
    /// ```
    pub fn apply<F>(self, f: F) -> Result<Validation, UsageError>
    where
        F: FnOnce(Validation) -> Result<Validation, UsageError>,
    {
        match self {
            Self::Active(validation) => f(validation),
            Self::Skipped(validation) => Ok(validation),
        }
    }

    /// Routes one check: validates `name`, evaluates `check` and records its
    /// failure when active; returns the accumulator untouched when skipped.
    pub(crate) fn run<F>(self, name: &str, check: F) -> Result<Validation, UsageError>
    where
        F: FnOnce() -> Result<Option<Failure>, UsageError>,
    {
        let validation = match self {
            Self::Active(validation) => validation,
            Self::Skipped(validation) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(name, "check skipped by gate");
                return Ok(validation);
            },
        };

        require_name(name)?;
        if let Some(failure) = check()? {
            validation.record(failure);
        }
        Ok(validation)
    }
}
