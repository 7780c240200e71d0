//! Rendering of aggregated failure lists.

use crate::types::failure::Failure;
use crate::types::validation_error::ValidationError;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Trait for customizing how an aggregated error lists its failures.
pub trait FailureFormatter {
    fn format_failure(&self, index: usize, failure: &Failure) -> String {
        format!("[{index}] {}: {}", failure.kind(), failure.message())
    }

    fn separator(&self) -> &str {
        "\n"
    }

    fn format_failures(&self, failures: &[Failure]) -> String {
        failures
            .iter()
            .enumerate()
            .map(|(i, failure)| self.format_failure(i, failure))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based failure formatter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Placed between the header and each entry.
    pub separator: String,
    /// Prefix for every entry except the last.
    pub item_prefix: Option<String>,
    /// Prefix for the last entry; falls back to `item_prefix`.
    pub last_prefix: Option<String>,
    pub numbered: bool,
    pub show_kind: bool,
    /// Append the diagnostic trace after the failure list.
    pub show_trace: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: Some("  ".into()),
            last_prefix: None,
            numbered: true,
            show_kind: true,
            show_trace: false,
        }
    }
}

impl FormatConfig {
    #[inline]
    pub fn pretty() -> Self {
        Self {
            item_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            numbered: true,
            show_kind: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), item_prefix: None, numbered: false, ..Default::default() }
    }
}

impl FailureFormatter for FormatConfig {
    fn format_failure(&self, index: usize, failure: &Failure) -> String {
        let mut result = String::new();
        if self.numbered {
            result.push_str(&format!("[{index}] "));
        }
        if self.show_kind {
            result.push_str(failure.kind().as_str());
            result.push_str(": ");
        }
        result.push_str(failure.message());
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_failures(&self, failures: &[Failure]) -> String {
        let last_idx = failures.len().saturating_sub(1);
        let mut result = String::with_capacity(failures.len() * 48);

        for (i, failure) in failures.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }
            let prefix = match i == last_idx {
                true => self.last_prefix.as_ref().or(self.item_prefix.as_ref()),
                false => self.item_prefix.as_ref(),
            };
            if let Some(p) = prefix {
                result.push_str(p);
            }
            result.push_str(&self.format_failure(i, failure));
        }
        result
    }
}

/// Builder for customizing the display of a [`ValidationError`].
///
/// # Examples
///
/// ```
/// use arg_rail::prelude::*;
///
/// let err = begin()
///     .check_true(false, "accepted")?
///     .check_numeric(Some("abc"), "amount")?
///     .finish()
///     .unwrap_err();
///
/// let line = err.formatter().compact().to_string();
/// assert_eq!(
///     line,
///     "multiple validation issues occurred: \
///      BooleanMismatch: accepted must be true, but was false | \
///      NotNumeric: amount must be a numeric string; actual value is \"abc\""
/// );
/// # Ok::<(), UsageError>(())
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a ValidationError,
    pub(crate) config: FormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a ValidationError) -> Self {
        Self { error, config: error.format_config().clone() }
    }

    pub fn with_config(mut self, config: FormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn numbered(mut self, numbered: bool) -> Self {
        self.config.numbered = numbered;
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn show_trace(mut self, show: bool) -> Self {
        self.config.show_trace = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = FormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = FormatConfig::compact();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = self.error;

        match error.single() {
            Some(failure) => write!(f, "{}: {}", error.header(), failure.message())?,
            None => {
                let body = self.config.format_failures(error.failures());
                let joint = if self.config.separator == "\n" { "\n" } else { ": " };
                write!(f, "{}{}{}", error.header(), joint, body)?;
            },
        }

        if self.config.show_trace && error.trace().is_captured() {
            write!(f, "\n\nstack trace:\n{}", error.trace())?;
        }

        Ok(())
    }
}
