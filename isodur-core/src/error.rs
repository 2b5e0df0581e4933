//! Error types for duration operations

use alloc::string::String;

/// Errors that can occur while parsing or converting a duration
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// A signed 64-bit arithmetic step exceeded the representable range
    #[cfg_attr(feature = "std", error("duration value overflows i64"))]
    Overflow,

    /// The input text violates the ISO 8601 duration grammar
    ///
    /// Carries the original input verbatim for diagnostics.
    #[cfg_attr(feature = "std", error("invalid ISO 8601 duration: {0:?}"))]
    InvalidDuration(String),
}
