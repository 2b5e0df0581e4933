//! # Isodur Core
//!
//! A bidirectional codec between calendar durations and the ISO 8601
//! duration text form `P[n]Y[n]M[n]W[n]DT[n]H[n]M[n]S`.
//!
//! ## Modules
//!
//! - `constants`: Fixed-length unit constants in nanoseconds
//! - `scanner`: Overflow-exact decimal scanning over the input text
//! - `types`: The `Duration` value and fixed-length span conversions
//! - `decoder`: Strict text → `Duration` parsing
//! - `encoder`: `Duration` → canonical text rendering

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod scanner;
pub mod types;

// Re-export commonly used items
pub use decoder::parse_duration;
pub use encoder::{format_nanos, write_duration};
pub use error::DurationError;
pub use types::Duration;

/// Result type alias for duration operations
pub type Result<T> = core::result::Result<T, DurationError>;
