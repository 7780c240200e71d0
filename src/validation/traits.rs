use crate::checks;
use crate::types::{Failure, UsageError};
use crate::validation::core::Validation;
use crate::validation::gate::Gate;
use core::fmt::Display;

/// The chainable check surface.
///
/// Implemented for [`Validation`] (every check runs), [`Gate`] (the next
/// check runs only when the gate is active) and `Option<Validation>`, where
/// `None` transparently starts a fresh accumulator so a chain can begin
/// before one exists.
///
/// Every check validates its own `name` first and returns
/// [`UsageError::EmptyName`] immediately when it is empty; that error is
/// never accumulated. A data failure is appended to the accumulator and the
/// chain carries on, so one [`finish`](Validation::finish) reports all of
/// them.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let mut pending: Option<Validation> = None;
/// pending = Some(pending.check_true(false, "enabled")?);
///
/// let err = pending.unwrap().finish().unwrap_err();
/// assert_eq!(err.single().map(Failure::kind), Some(FailureKind::BooleanMismatch));
/// # Ok::<(), UsageError>(())
/// ```
pub trait Chain: Sized {
    /// Resolves this link into the routing decision for the next check.
    fn into_gate(self) -> Gate;

    /// Makes the next check conditional on `condition`.
    ///
    /// Gating an already skipped link keeps it skipped.
    fn gate_on(self, condition: bool) -> Gate {
        match self.into_gate() {
            Gate::Active(validation) => Gate::new(validation, condition),
            skipped => skipped,
        }
    }

    /// Appends `failure` and returns the accumulator.
    fn add_failure(self, failure: Failure) -> Validation {
        match self.into_gate() {
            Gate::Active(validation) => {
                validation.record(failure);
                validation
            },
            Gate::Skipped(validation) => validation,
        }
    }

    /// Records `NullArgument` when `value` is `None`.
    fn check_not_null<T>(self, value: Option<T>, name: &str) -> Result<Validation, UsageError> {
        self.into_gate().run(name, || Ok(checks::not_null(value.as_ref(), name).err()))
    }

    /// Records `NullArgument` for `None` and `EmptyArgument` for `Some("")`.
    fn check_not_null_or_empty(
        self,
        value: Option<&str>,
        name: &str,
    ) -> Result<Validation, UsageError> {
        self.into_gate().run(name, || Ok(checks::not_null_or_empty(value, name).err()))
    }

    /// Records `OutOfRange` unless `min <= value <= max`.
    ///
    /// Returns [`UsageError::InvertedBounds`] when `min > max`, whatever the value.
    fn check_within_range<T>(
        self,
        value: T,
        name: &str,
        min: T,
        max: T,
    ) -> Result<Validation, UsageError>
    where
        T: PartialOrd + Display,
    {
        self.check_optional_within_range(Some(value), name, Some(min), Some(max))
    }

    /// Range check over possibly absent values.
    ///
    /// An absent value is recorded as `NullArgument`; an absent bound is a
    /// [`UsageError::MissingBound`].
    fn check_optional_within_range<T>(
        self,
        value: Option<T>,
        name: &str,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<Validation, UsageError>
    where
        T: PartialOrd + Display,
    {
        self.into_gate().run(name, || {
            let (min, max) = checks::require_bounds(min, max)?;
            Ok(checks::within_range(value.as_ref(), name, &min, &max).err())
        })
    }

    /// Records a failure unless `value` is an integer or decimal number.
    fn check_numeric(self, value: Option<&str>, name: &str) -> Result<Validation, UsageError> {
        self.into_gate().run(name, || Ok(checks::numeric(value, name).err()))
    }

    /// Records `BooleanMismatch` when `value` is `false`.
    fn check_true(self, value: bool, name: &str) -> Result<Validation, UsageError> {
        self.into_gate().run(name, || Ok(checks::is_true(value, name).err()))
    }

    /// Records `BooleanMismatch` when `value` is `true`.
    fn check_false(self, value: bool, name: &str) -> Result<Validation, UsageError> {
        self.into_gate().run(name, || Ok(checks::is_false(value, name).err()))
    }

    /// Runs a caller-supplied check, which receives the validated `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_rail::{failure, prelude::*};
    ///
    /// let replicas = 3;
    /// let err = begin()
    ///     .check_with("replicas", |name| {
    ///         if replicas % 2 == 1 {
    ///             Err(failure!(name, "{name} must be even, got {replicas}"))
    ///         } else {
    ///             Ok(())
    ///         }
    ///     })?
    ///     .finish()
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.single().unwrap().kind(), FailureKind::Custom);
    /// # Ok::<(), UsageError>(())
    /// ```
    fn check_with<F>(self, name: &str, check: F) -> Result<Validation, UsageError>
    where
        F: FnOnce(&str) -> Result<(), Failure>,
    {
        self.into_gate().run(name, || Ok(check(name).err()))
    }
}

impl Chain for Validation {
    #[inline]
    fn into_gate(self) -> Gate {
        Gate::Active(self)
    }
}

impl Chain for Gate {
    #[inline]
    fn into_gate(self) -> Gate {
        self
    }
}

impl Chain for Option<Validation> {
    #[inline]
    fn into_gate(self) -> Gate {
        Gate::Active(self.unwrap_or_default())
    }
}
