//! Fixed-length unit constants for lossy span conversions
//!
//! Calendar units do not have a single real-world length, so `MONTH` and
//! `YEAR` are Gregorian averages. They exist only for the explicit lossy
//! fold into a nanosecond span and must not be used for calendar-accurate
//! date arithmetic.

/// Nanoseconds in one second
pub const SECOND: i64 = 1_000_000_000;

/// Nanoseconds in one minute
pub const MINUTE: i64 = 60 * SECOND;

/// Nanoseconds in one hour
pub const HOUR: i64 = 60 * MINUTE;

/// Nanoseconds in one fixed 24-hour day
pub const DAY: i64 = 24 * HOUR;

/// Nanoseconds in one week (7 fixed days)
pub const WEEK: i64 = 7 * DAY;

/// Nanoseconds in one average Gregorian month
///
/// 400 years span 146097 days once leap-year rules are applied, and contain
/// 4800 months, giving 30.436875 days per month. Every division below is
/// exact in integer arithmetic.
pub const MONTH: i64 = DAY / 10 * 146_097 / 4800 * 10;

/// Nanoseconds in one average Gregorian year (12 average months)
pub const YEAR: i64 = 12 * MONTH;
