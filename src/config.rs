//! Per-chain configuration.
//!
//! A [`RailConfig`] is fixed when a [`Validation`](crate::Validation) is
//! created and shared by every clone of it. It controls trace capture, which
//! frames are elided from traces, and how the aggregated error renders.
//!
//! # Examples
//!
//! ```
//! use arg_rail::{begin_with, FormatConfig, RailConfig, TraceCapture};
//!
//! let config = RailConfig::default()
//!     .with_trace(TraceCapture::Disabled)
//!     .with_format(FormatConfig::compact());
//!
//! let validation = begin_with(config);
//! assert_eq!(validation.config().trace, TraceCapture::Disabled);
//! ```
use crate::types::error_formatter::FormatConfig;
use crate::types::stack_trace::{FrameFilter, TraceCapture};

/// Settings shared by a validation chain and the errors it raises.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RailConfig {
    /// When to capture a stack trace for a [`ValidationError`](crate::ValidationError).
    pub trace: TraceCapture,
    /// Frames elided from captured traces.
    pub frame_filter: FrameFilter,
    /// Default rendering of the aggregated error.
    pub format: FormatConfig,
}

impl RailConfig {
    /// Configuration that never captures a trace.
    #[inline]
    pub fn without_trace() -> Self {
        Self { trace: TraceCapture::Disabled, ..Default::default() }
    }

    /// Configuration that always captures a trace, ignoring `RUST_BACKTRACE`.
    #[inline]
    pub fn forced_trace() -> Self {
        Self { trace: TraceCapture::Forced, ..Default::default() }
    }

    pub fn with_trace(mut self, trace: TraceCapture) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_frame_filter(mut self, filter: FrameFilter) -> Self {
        self.frame_filter = filter;
        self
    }

    /// Adds one more infrastructure identifier to the frame filter.
    pub fn hide_frames(mut self, identifier: &'static str) -> Self {
        self.frame_filter = self.frame_filter.with_hidden(identifier);
        self
    }

    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }
}
