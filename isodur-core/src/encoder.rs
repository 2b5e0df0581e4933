//! Canonical duration text rendering

use crate::constants::SECOND;
use crate::types::Duration;
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Write};

/// Append the canonical text form of `d` to `out`
///
/// Output shape: optional leading `-`, literal `P`, then each nonzero
/// component in `Y M W D T H M S` order. Seconds and nanoseconds combine
/// into one decimal with up to 9 fraction digits, trailing zeros stripped.
/// A duration with no nonzero component renders as `P0D` (`-P0D` when
/// negative), never as a bare `P`.
pub fn write_duration<W: Write>(d: &Duration, out: &mut W) -> fmt::Result {
    if d.negative {
        out.write_char('-')?;
    }
    out.write_char('P')?;

    let mut wrote = false;

    if d.years != 0 {
        write!(out, "{}Y", d.years)?;
        wrote = true;
    }
    if d.months != 0 {
        write!(out, "{}M", d.months)?;
        wrote = true;
    }
    if d.weeks != 0 {
        write!(out, "{}W", d.weeks)?;
        wrote = true;
    }
    if d.days != 0 {
        write!(out, "{}D", d.days)?;
        wrote = true;
    }

    if d.hours != 0 || d.minutes != 0 || d.seconds != 0 || d.nanoseconds != 0 {
        out.write_char('T')?;
    }

    if d.hours != 0 {
        write!(out, "{}H", d.hours)?;
        wrote = true;
    }
    if d.minutes != 0 {
        write!(out, "{}M", d.minutes)?;
        wrote = true;
    }

    if d.seconds != 0 || d.nanoseconds != 0 {
        let (neg, secs, nanos) = split_seconds(d.seconds, d.nanoseconds);
        if neg {
            out.write_char('-')?;
        }
        write!(out, "{}", secs)?;
        if nanos != 0 {
            let digits = format!("{:09}", nanos);
            out.write_char('.')?;
            out.write_str(digits.trim_end_matches('0'))?;
        }
        out.write_char('S')?;
        wrote = true;
    }

    if !wrote {
        out.write_str("0D")?;
    }
    Ok(())
}

/// Normalize mixed-sign seconds/nanoseconds and split into sign + magnitudes
///
/// When the two disagree in sign, one second is borrowed and the
/// nanoseconds complemented against a full second, so seconds=0,
/// nanoseconds=-500_000_000 renders as `-0.5` rather than leaking the raw
/// field signs into the text.
///
/// The fields are public, so a nanosecond magnitude of a second or more
/// can arrive here; whole seconds are carried out first to keep the
/// fraction at 9 digits. The carry saturates at the ends of the i64 range
/// because formatting never fails.
fn split_seconds(seconds: i64, nanoseconds: i64) -> (bool, u64, u64) {
    let mut secs = seconds.saturating_add(nanoseconds / SECOND);
    let mut nanos = nanoseconds % SECOND;
    if secs > 0 && nanos < 0 {
        secs -= 1;
        nanos += SECOND;
    } else if secs < 0 && nanos > 0 {
        secs += 1;
        nanos -= SECOND;
    }
    let neg = secs < 0 || nanos < 0;
    (neg, secs.unsigned_abs(), nanos.unsigned_abs())
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_duration(self, f)
    }
}

/// Render a fixed-length nanosecond span as ISO 8601 duration text
///
/// For values that are pure elapsed time rather than calendar durations.
/// Zero renders as `P0D`; any other span always includes `T` and
/// decomposes into hours, minutes and fractional seconds. Decomposition
/// stops at hours because days are not a fixed length for an arbitrary
/// elapsed-time value. The sign is a single leading `-` covering the whole
/// span. Never fails.
pub fn format_nanos(nanoseconds: i64) -> String {
    Duration::from_nanos(nanoseconds).to_string()
}
