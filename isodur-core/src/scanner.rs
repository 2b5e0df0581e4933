//! Decimal scanner over the unconsumed tail of the input text

use crate::error::DurationError;

/// Cursor over the remaining bytes of a duration string
///
/// The grammar is pure ASCII, so scanning works on bytes. Any non-ASCII
/// byte simply fails to match a digit or unit letter and is surfaced as a
/// grammar error by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    rest: &'a [u8],
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            rest: input,
            consumed: 0,
        }
    }

    /// The next unconsumed byte, if any
    pub fn peek(&self) -> Option<u8> {
        self.rest.first().copied()
    }

    /// Advance past the next byte
    ///
    /// Does nothing at end of input.
    pub fn bump(&mut self) {
        if let Some(rest) = self.rest.get(1..) {
            self.rest = rest;
            self.consumed += 1;
        }
    }

    /// Check whether all input has been consumed
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    /// Number of bytes consumed so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consume a leading `+` or `-` if present
    ///
    /// Returns true for `-`; the default is positive. Never fails.
    pub fn consume_sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.bump();
                true
            }
            Some(b'+') => {
                self.bump();
                false
            }
            _ => false,
        }
    }

    /// Consume the maximal run of ASCII digits into an i64 accumulator
    ///
    /// Each digit is folded in with checked arithmetic, so the accumulator
    /// can never wrap: the first digit that would exceed `i64::MAX` fails
    /// with [`DurationError::Overflow`]. Consuming zero digits is a valid
    /// outcome; the returned flag tells the caller whether any digit was
    /// actually consumed.
    pub fn consume_int(&mut self) -> Result<(i64, bool), DurationError> {
        let mut value: i64 = 0;
        let mut any = false;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(c - b'0')))
                .ok_or(DurationError::Overflow)?;
            any = true;
            self.bump();
        }
        Ok((value, any))
    }

    /// Consume the digits of a decimal fraction
    ///
    /// Returns the accumulated value, the base-10 scale factor
    /// (10^digits-accumulated), and whether any digit was consumed.
    ///
    /// Unlike [`Cursor::consume_int`] this never fails: once the
    /// accumulator would overflow, remaining digits are scanned and
    /// discarded and the scale stops advancing, silently truncating
    /// precision. Fractions only redistribute a sub-unit remainder, so the
    /// loss is acceptable there and only there.
    pub fn consume_fraction(&mut self) -> (i64, f64, bool) {
        let mut value: i64 = 0;
        let mut scale: f64 = 1.0;
        let mut any = false;
        let mut truncated = false;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            any = true;
            self.bump();
            if truncated {
                continue;
            }
            match value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(c - b'0')))
            {
                Some(v) => {
                    value = v;
                    scale *= 10.0;
                }
                None => truncated = true,
            }
        }
        (value, scale, any)
    }
}
