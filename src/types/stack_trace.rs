//! Diagnostic traces with the library's own frames elided.
//!
//! A [`ValidationError`](crate::ValidationError) captures a [`StackTrace`]
//! when it is built. The raw backtrace starts deep inside this crate
//! (`finish`, the error constructor, the capture itself), which is noise for
//! the caller. [`FrameFilter`] holds an explicit list of function identifiers
//! that count as infrastructure; every frame up to and including the
//! outermost match is dropped, so the trace starts at the caller's own code.
//!
//! # Examples
//!
//! ```
//! use arg_rail::{FrameFilter, StackTrace};
//!
//! let raw = "\
//!    0: arg_rail::validation::core::Validation::finish
//!              at ./src/validation/core.rs:10:5
//!    1: my_app::handlers::create_user
//!              at ./src/handlers.rs:42:9
//! ";
//! let trace = StackTrace::parse(raw, &FrameFilter::default());
//! assert_eq!(trace.frames().len(), 1);
//! assert_eq!(trace.frames()[0].symbol(), "my_app::handlers::create_user");
//! ```
use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifiers of the functions that build and raise validation errors.
///
/// Each entry is matched as a substring of a frame's symbol, so an entry
/// naming a type also covers its methods and trait impls.
pub const INFRASTRUCTURE_FRAMES: &[&str] = &[
    "arg_rail::types::stack_trace::StackTrace::capture",
    "arg_rail::types::validation_error::ValidationError",
    "arg_rail::validation::core::Validation::finish",
    "arg_rail::validation::core::Inner",
    "drop_in_place<arg_rail::validation::core::Validation>",
    "arg_rail::validation::scope::scope",
];

/// How eagerly a trace is captured when an error is built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceCapture {
    /// Never capture.
    Disabled,
    /// Capture when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it.
    #[default]
    Env,
    /// Always capture, ignoring the environment.
    Forced,
}

/// Whether a [`StackTrace`] holds frames.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceStatus {
    Captured,
    Disabled,
    Unsupported,
}

/// One frame of a captured trace.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    symbol: String,
    location: Option<String>,
}

impl Frame {
    #[inline]
    pub fn new(symbol: impl Into<String>, location: Option<String>) -> Self {
        Self { symbol: symbol.into(), location }
    }

    /// Demangled function name, or `<unknown>`.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// `file:line:column`, when debug info resolved it.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "at {} ({})", self.symbol, location),
            None => write!(f, "at {}", self.symbol),
        }
    }
}

/// Set of function identifiers treated as library infrastructure.
///
/// # Examples
///
/// ```
/// use arg_rail::FrameFilter;
///
/// let filter = FrameFilter::empty().with_hidden("my_app::validation::");
/// assert!(filter.hides("my_app::validation::check_user"));
/// assert!(!filter.hides("my_app::handlers::create_user"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameFilter {
    hidden: Vec<Cow<'static, str>>,
}

impl FrameFilter {
    /// A filter that hides nothing.
    #[inline]
    pub fn empty() -> Self {
        Self { hidden: Vec::new() }
    }

    /// Marks another identifier as infrastructure.
    ///
    /// Useful for wrappers that build their own validation helpers on top of
    /// this crate and want those frames elided too.
    pub fn with_hidden(mut self, identifier: impl Into<Cow<'static, str>>) -> Self {
        self.hidden.push(identifier.into());
        self
    }

    /// Returns the identifiers this filter hides.
    pub fn hidden(&self) -> impl Iterator<Item = &str> {
        self.hidden.iter().map(|id| id.as_ref())
    }

    /// Returns `true` if `symbol` belongs to a hidden function.
    pub fn hides(&self, symbol: &str) -> bool {
        self.hidden.iter().any(|id| symbol.contains(id.as_ref()))
    }

    /// Drops every frame up to and including the outermost hidden frame.
    ///
    /// Frames are ordered innermost first. When no frame is hidden the
    /// input is returned untouched.
    pub fn apply(&self, mut frames: Vec<Frame>) -> Vec<Frame> {
        match frames.iter().rposition(|frame| self.hides(&frame.symbol)) {
            Some(last_hidden) => frames.split_off(last_hidden + 1),
            None => frames,
        }
    }
}

impl Default for FrameFilter {
    fn default() -> Self {
        Self { hidden: INFRASTRUCTURE_FRAMES.iter().map(|id| Cow::Borrowed(*id)).collect() }
    }
}

/// A captured call stack, innermost frame first.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace {
    status: TraceStatus,
    frames: Vec<Frame>,
}

impl StackTrace {
    /// A trace that was deliberately not captured.
    #[inline]
    pub fn disabled() -> Self {
        Self { status: TraceStatus::Disabled, frames: Vec::new() }
    }

    /// Captures the current call stack and elides frames hidden by `filter`.
    #[inline(never)]
    pub fn capture(mode: TraceCapture, filter: &FrameFilter) -> Self {
        let backtrace = match mode {
            TraceCapture::Disabled => return Self::disabled(),
            TraceCapture::Env => Backtrace::capture(),
            TraceCapture::Forced => Backtrace::force_capture(),
        };

        match backtrace.status() {
            BacktraceStatus::Captured => Self::parse(&backtrace.to_string(), filter),
            BacktraceStatus::Disabled => Self::disabled(),
            _ => Self { status: TraceStatus::Unsupported, frames: Vec::new() },
        }
    }

    /// Parses the `Display` rendering of a [`std::backtrace::Backtrace`].
    ///
    /// Frame lines look like `  12: crate::module::function`, optionally
    /// followed by an `at file:line:column` line.
    pub fn parse(rendered: &str, filter: &FrameFilter) -> Self {
        let mut frames: Vec<Frame> = Vec::new();

        for line in rendered.lines() {
            let line = line.trim();
            if let Some(location) = line.strip_prefix("at ") {
                if let Some(frame) = frames.last_mut() {
                    if frame.location.is_none() {
                        frame.location = Some(location.to_string());
                    }
                }
                continue;
            }

            if let Some((index, symbol)) = line.split_once(": ") {
                if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                    frames.push(Frame::new(symbol.trim(), None));
                }
            }
        }

        Self { status: TraceStatus::Captured, frames: filter.apply(frames) }
    }

    #[inline]
    pub fn status(&self) -> TraceStatus {
        self.status
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.status == TraceStatus::Captured
    }

    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            TraceStatus::Disabled => f.write_str("disabled backtrace"),
            TraceStatus::Unsupported => f.write_str("unsupported backtrace"),
            TraceStatus::Captured => {
                for (i, frame) in self.frames.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "   {frame}")?;
                }
                Ok(())
            },
        }
    }
}
