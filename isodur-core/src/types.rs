//! Core duration value type

use crate::constants::{DAY, HOUR, MINUTE, MONTH, SECOND, WEEK, YEAR};
use crate::error::DurationError;
use serde::{Deserialize, Serialize};

/// An ISO 8601 calendar duration
///
/// <https://en.wikipedia.org/wiki/ISO_8601#Durations>
///
/// The sign of the whole value lives in `negative`; individual fields are
/// conceptually non-negative magnitudes, although component signs in parsed
/// text (e.g. `PT-0.5S`) can leave a negative field behind. Values are
/// immutable once constructed: the parser either returns a complete
/// duration or fails with no partial result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duration {
    /// Calendar years
    pub years: i64,

    /// Calendar months
    pub months: i64,

    /// Calendar weeks
    pub weeks: i64,

    /// Calendar days
    pub days: i64,

    /// Clock hours
    pub hours: i64,

    /// Clock minutes
    pub minutes: i64,

    /// Clock seconds
    pub seconds: i64,

    /// Sub-second remainder, within ±999_999_999 and sharing sign with
    /// `seconds` (or zero) in any value meant for output
    pub nanoseconds: i64,

    /// True if the whole value is negative
    pub negative: bool,
}

impl Duration {
    /// Build an elapsed-time duration from a signed nanosecond count
    ///
    /// Only clock units below days are populated, because days are not a
    /// fixed length for an arbitrary elapsed-time value (DST). The sign is
    /// carried by `negative`.
    pub fn from_nanos(nanoseconds: i64) -> Self {
        let negative = nanoseconds < 0;
        let mut rem = nanoseconds.unsigned_abs();

        let hours = (rem / HOUR as u64) as i64;
        rem %= HOUR as u64;
        let minutes = (rem / MINUTE as u64) as i64;
        rem %= MINUTE as u64;
        let seconds = (rem / SECOND as u64) as i64;
        rem %= SECOND as u64;

        Self {
            hours,
            minutes,
            seconds,
            nanoseconds: rem as i64,
            negative,
            ..Self::default()
        }
    }

    /// Check whether every magnitude field is zero
    ///
    /// Ignores `negative`: a bare `-P` parses to a negative zero duration.
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanoseconds == 0
    }

    /// Fold this duration into a single signed nanosecond count
    ///
    /// Calendar units are approximated with the fixed-length constants from
    /// [`crate::constants`]: a 24-hour day, a 7-day week, the average
    /// Gregorian month and a 12-month year. The result is therefore lossy
    /// and must never be used for calendar-accurate date arithmetic.
    ///
    /// Fails with [`DurationError::Overflow`] if any unit's contribution or
    /// the running sum leaves the i64 range.
    pub fn to_nanos(&self) -> Result<i64, DurationError> {
        let mut total: i64 = 0;
        total = add_scaled(total, self.years, YEAR)?;
        total = add_scaled(total, self.months, MONTH)?;
        total = add_scaled(total, self.weeks, WEEK)?;
        total = add_scaled(total, self.days, DAY)?;
        total = add_scaled(total, self.hours, HOUR)?;
        total = add_scaled(total, self.minutes, MINUTE)?;
        total = add_scaled(total, self.seconds, SECOND)?;
        total = add_scaled(total, self.nanoseconds, 1)?;
        if self.negative {
            total = total.checked_neg().ok_or(DurationError::Overflow)?;
        }
        Ok(total)
    }
}

/// Add `count` units of `unit` nanoseconds onto a running total, checked
fn add_scaled(total: i64, count: i64, unit: i64) -> Result<i64, DurationError> {
    let scaled = count.checked_mul(unit).ok_or(DurationError::Overflow)?;
    total.checked_add(scaled).ok_or(DurationError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nanos_decomposition() {
        let d = Duration::from_nanos(HOUR + 30 * MINUTE + 5 * SECOND + 42);
        assert_eq!(d.hours, 1);
        assert_eq!(d.minutes, 30);
        assert_eq!(d.seconds, 5);
        assert_eq!(d.nanoseconds, 42);
        assert!(!d.negative);
        // No calendar units for an elapsed-time value
        assert_eq!((d.years, d.months, d.weeks, d.days), (0, 0, 0, 0));
    }

    #[test]
    fn test_from_nanos_negative() {
        let d = Duration::from_nanos(-(90 * SECOND));
        assert!(d.negative);
        assert_eq!(d.minutes, 1);
        assert_eq!(d.seconds, 30);
    }

    #[test]
    fn test_from_nanos_min() {
        // i64::MIN has no positive counterpart; unsigned_abs still works
        let d = Duration::from_nanos(i64::MIN);
        assert!(d.negative);
        assert_eq!(d.hours as u64, i64::MIN.unsigned_abs() / HOUR as u64);
        // The magnitude 2^63 cannot be summed back inside i64, so the fold
        // reports overflow rather than fabricating the value
        assert_eq!(d.to_nanos(), Err(DurationError::Overflow));
    }

    #[test]
    fn test_to_nanos_round_trip() {
        for nanos in [0, 1, -1, 5400 * SECOND, -90 * SECOND, 123_456_789_012_345] {
            assert_eq!(Duration::from_nanos(nanos).to_nanos().unwrap(), nanos);
        }
    }

    #[test]
    fn test_to_nanos_calendar_fold() {
        let d = Duration {
            years: 1,
            months: 2,
            weeks: 3,
            days: 4,
            ..Duration::default()
        };
        let expected = YEAR + 2 * MONTH + 3 * WEEK + 4 * DAY;
        assert_eq!(d.to_nanos().unwrap(), expected);
    }

    #[test]
    fn test_to_nanos_overflow() {
        let d = Duration {
            years: i64::MAX,
            ..Duration::default()
        };
        assert_eq!(d.to_nanos(), Err(DurationError::Overflow));

        // Individually representable contributions whose sum overflows
        let d = Duration {
            hours: i64::MAX / HOUR,
            minutes: i64::MAX / MINUTE,
            ..Duration::default()
        };
        assert_eq!(d.to_nanos(), Err(DurationError::Overflow));
    }

    #[test]
    fn test_is_zero() {
        assert!(Duration::default().is_zero());
        assert!(Duration {
            negative: true,
            ..Duration::default()
        }
        .is_zero());
        assert!(!Duration {
            nanoseconds: 1,
            ..Duration::default()
        }
        .is_zero());
    }

    #[test]
    fn test_serde_round_trip() {
        let d = Duration {
            years: 2,
            days: 10,
            seconds: 30,
            negative: true,
            ..Duration::default()
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: Duration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
