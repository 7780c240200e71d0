use crate::config::RailConfig;
use crate::types::{ErrorVec, Failure, ValidationError};
use core::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Starts a validation chain with the default configuration.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// fn register(name: Option<&str>, age: i32, accepted: bool) -> Result<(), Box<dyn std::error::Error>> {
///     begin()
///         .check_not_null_or_empty(name, "name")?
///         .check_within_range(age, "age", 18, 130)?
///         .check_true(accepted, "accepted")?
///         .finish()?;
///     Ok(())
/// }
///
/// assert!(register(Some("ada"), 36, true).is_ok());
///
/// let err = register(None, 12, true).unwrap_err();
/// let err = err.downcast_ref::<ValidationError>().unwrap();
/// assert_eq!(err.len(), 2);
/// ```
#[inline]
pub fn begin() -> Validation {
    Validation::new()
}

/// Starts a validation chain with a caller-supplied configuration.
#[inline]
pub fn begin_with(config: RailConfig) -> Validation {
    Validation::with_config(config)
}

/// Accumulator for the failures of one validation chain.
///
/// `Validation` is a cheap handle onto shared state: clones see and append to
/// the same ordered failure list, so one accumulator can be handed to several
/// branches or threads. Appends are serialized by an internal mutex.
///
/// Failures only surface through [`finish`](Self::finish). When the last
/// handle is dropped without `finish` ever having been called while failures
/// are pending, the drop panics with the aggregated error rather than let
/// the failures disappear.
///
/// The check methods live on the [`Chain`](crate::Chain) trait.
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let validation = begin()
///     .check_not_null(None::<u32>, "retries")?
///     .check_false(true, "dry_run")?;
/// assert_eq!(validation.len(), 2);
///
/// let err = validation.finish().unwrap_err();
/// assert!(matches!(err.cause(), Cause::Multiple(failures) if failures.len() == 2));
/// # Ok::<(), UsageError>(())
/// ```
#[must_use = "failures are only reported by `finish`"]
#[derive(Clone)]
pub struct Validation {
    inner: Arc<Inner>,
}

struct Inner {
    failures: Mutex<ErrorVec<Failure>>,
    finished: AtomicBool,
    config: RailConfig,
}

impl Validation {
    /// Creates an empty, unfinished accumulator with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(RailConfig::default())
    }

    /// Creates an empty, unfinished accumulator.
    pub fn with_config(config: RailConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                failures: Mutex::new(ErrorVec::new()),
                finished: AtomicBool::new(false),
                config,
            }),
        }
    }

    #[inline]
    pub fn config(&self) -> &RailConfig {
        &self.inner.config
    }

    fn lock(&self) -> MutexGuard<'_, ErrorVec<Failure>> {
        // Failures are plain data; a panic mid-push cannot leave them torn.
        self.inner.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a failure through a shared reference.
    ///
    /// This is the by-reference form of [`Chain::add_failure`](crate::Chain::add_failure)
    /// for code that shares one accumulator across threads.
    pub fn record(&self, failure: Failure) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            kind = failure.kind().as_str(),
            name = failure.name(),
            "validation failure recorded"
        );
        self.lock().push(failure);
    }

    /// Appends the failure of an already evaluated check, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_rail::{begin, checks};
    ///
    /// let validation = begin()
    ///     .absorb(checks::numeric(Some("12"), "count"))
    ///     .absorb(checks::numeric(Some("twelve"), "limit"));
    ///
    /// assert_eq!(validation.len(), 1);
    /// assert!(validation.finish().is_err());
    /// ```
    pub fn absorb<T>(self, result: Result<T, Failure>) -> Self {
        if let Err(failure) = result {
            self.record(failure);
        }
        self
    }

    /// Number of failures recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[inline]
    pub fn has_failures(&self) -> bool {
        !self.is_empty()
    }

    /// Snapshot of the failures recorded so far, in check order.
    pub fn failures(&self) -> Vec<Failure> {
        self.lock().iter().cloned().collect()
    }

    /// `true` once [`finish`](Self::finish) has been called on any handle.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.inner.finished.load(Ordering::Acquire)
    }

    /// Returns `true` if both handles share the same accumulator.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Marks the chain finished without reporting anything.
    pub(crate) fn mark_observed(&self) {
        self.inner.finished.store(true, Ordering::Release);
    }

    /// Reports the chain's outcome.
    ///
    /// Marks the chain finished, then returns `Ok(())` if no failure was
    /// recorded, or a [`ValidationError`] over a snapshot of all failures.
    /// Failures are never cleared: calling `finish` again reports them again,
    /// together with anything appended in between.
    ///
    /// # Examples
    ///
    /// ```
    /// use arg_rail::prelude::*;
    ///
    /// let validation = begin().check_numeric(Some("n/a"), "threshold")?;
    ///
    /// let first = validation.finish().unwrap_err();
    /// let second = validation.finish().unwrap_err();
    /// assert_eq!(first.failures(), second.failures());
    /// # Ok::<(), UsageError>(())
    /// ```
    #[inline(never)]
    pub fn finish(&self) -> Result<(), ValidationError> {
        self.inner.finished.store(true, Ordering::Release);
        let snapshot: ErrorVec<Failure> = self.lock().iter().cloned().collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(failures = snapshot.len(), "validation chain finished");

        match ValidationError::new(snapshot, &self.inner.config) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Validation {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validation")
            .field("failures", &self.len())
            .field("finished", &self.is_finished())
            .finish_non_exhaustive()
    }
}

impl Drop for Inner {
    #[inline(never)]
    fn drop(&mut self) {
        if *self.finished.get_mut() {
            return;
        }

        let failures =
            core::mem::take(self.failures.get_mut().unwrap_or_else(PoisonError::into_inner));
        let Some(error) = ValidationError::unobserved(failures, &self.config) else {
            return;
        };

        #[cfg(feature = "tracing")]
        tracing::error!(failures = error.len(), "{error}");

        // Unwinding already; a second panic would abort the process.
        if std::thread::panicking() {
            return;
        }
        panic!("{error}");
    }
}

impl FromIterator<Failure> for Validation {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        let validation = Self::new();
        validation.lock().extend(iter);
        validation
    }
}

impl Extend<Failure> for Validation {
    fn extend<I: IntoIterator<Item = Failure>>(&mut self, iter: I) {
        for failure in iter {
            self.record(failure);
        }
    }
}
