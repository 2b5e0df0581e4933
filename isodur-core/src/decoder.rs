//! Strict ISO 8601 duration parsing

use crate::constants::{DAY, HOUR, MINUTE, MONTH, SECOND, WEEK, YEAR};
use crate::error::DurationError;
use crate::scanner::Cursor;
use crate::types::Duration;
use alloc::string::ToString;
use core::str::FromStr;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Parse an ISO 8601 duration string such as `P3Y6M4DT12H30M5.5S`
///
/// The grammar is a two-state machine: units `Y`, `M`, `W`, `D` are legal
/// before the time designator `T`, units `H`, `M`, `S` after it. Each
/// component is an optionally signed integer with an optional fraction; a
/// fraction is only legal on the last component and cascades into the next
/// finer unit (`P1.5D` yields 1 day and 12 hours, `PT0.5S` yields
/// 500_000_000 nanoseconds).
///
/// `P` and `PT` alone are accepted as the empty (all-zero) duration.
///
/// # Errors
///
/// - [`DurationError::InvalidDuration`] on any grammar violation, carrying
///   the original input verbatim.
/// - [`DurationError::Overflow`] when digit accumulation or field
///   accumulation leaves the i64 range.
pub fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    #[cfg(feature = "logging")]
    debug!("parsing duration text {:?}", input);

    let mut cur = Cursor::new(input.as_bytes());
    let mut out = Duration {
        negative: cur.consume_sign(),
        ..Duration::default()
    };

    if cur.peek() != Some(b'P') {
        return Err(invalid(input));
    }
    cur.bump();

    let mut after_t = false;
    while let Some(c) = cur.peek() {
        if c == b'T' {
            cur.bump();
            after_t = true;
            continue;
        }

        // Component: [+-]? [0-9]* (. [0-9]*)? unit-letter
        let neg = cur.consume_sign();
        let (mut value, has_int) = cur.consume_int()?;
        if neg {
            value = -value;
        }

        let mut frac: i64 = 0;
        let mut scale: f64 = 1.0;
        let mut has_frac = false;
        if cur.peek() == Some(b'.') {
            cur.bump();
            let (f, s, any) = cur.consume_fraction();
            frac = if neg { -f } else { f };
            scale = s;
            has_frac = any;
        }
        if !has_int && !has_frac {
            // no digits at all, e.g. "P.D" or "P-D"
            return Err(invalid(input));
        }

        let Some(unit) = cur.peek() else {
            // number with no unit letter
            return Err(invalid(input));
        };
        cur.bump();

        match (after_t, unit) {
            (false, b'Y') => {
                out.years = accumulate(out.years, value)?;
                out.months = accumulate(out.months, cascade(frac, YEAR / MONTH, scale))?;
            }
            (false, b'M') => {
                out.months = accumulate(out.months, value)?;
                out.weeks = accumulate(out.weeks, cascade(frac, MONTH / WEEK, scale))?;
            }
            (false, b'W') => {
                out.weeks = accumulate(out.weeks, value)?;
                out.days = accumulate(out.days, cascade(frac, WEEK / DAY, scale))?;
            }
            (false, b'D') => {
                out.days = accumulate(out.days, value)?;
                out.hours = accumulate(out.hours, cascade(frac, DAY / HOUR, scale))?;
            }
            (true, b'H') => {
                out.hours = accumulate(out.hours, value)?;
                out.minutes = accumulate(out.minutes, cascade(frac, HOUR / MINUTE, scale))?;
            }
            (true, b'M') => {
                out.minutes = accumulate(out.minutes, value)?;
                out.seconds = accumulate(out.seconds, cascade(frac, MINUTE / SECOND, scale))?;
            }
            (true, b'S') => {
                out.seconds = accumulate(out.seconds, value)?;
                out.nanoseconds = accumulate(out.nanoseconds, cascade(frac, SECOND, scale))?;
            }
            // unknown unit, or a unit on the wrong side of 'T'
            _ => return Err(invalid(input)),
        }

        if has_frac && !cur.is_empty() {
            // a fraction is only legal on the last component
            return Err(invalid(input));
        }
    }

    Ok(out)
}

/// Convert a fractional remainder into whole units of the next finer field
///
/// `ratio` is the integer quotient of the two units' fixed-length
/// constants and `scale` the fraction's base-10 scale factor. The fraction
/// is strictly less than one unit, but a truncated all-nines accumulator
/// can round up to exactly 1.0 in f64, so the result is capped at one
/// finer unit short of a whole coarser unit.
fn cascade(frac: i64, ratio: i64, scale: f64) -> i64 {
    let converted = (frac as f64 * (ratio as f64 / scale)) as i64;
    converted.clamp(1 - ratio, ratio - 1)
}

/// Checked field accumulation; repeated units add up
fn accumulate(field: i64, value: i64) -> Result<i64, DurationError> {
    field.checked_add(value).ok_or(DurationError::Overflow)
}

fn invalid(input: &str) -> DurationError {
    #[cfg(feature = "logging")]
    warn!("rejecting invalid duration text {:?}", input);
    DurationError::InvalidDuration(input.to_string())
}

impl FromStr for Duration {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_duration(s)
    }
}
