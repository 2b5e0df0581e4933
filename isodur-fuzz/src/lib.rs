//! Fuzzing entry points for the isodur-core codec
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_parse

/// Feed arbitrary bytes to the parser; it must only ever return errors
pub fn fuzz_parse(data: &[u8]) {
    use isodur_core::parse_duration;

    if let Ok(text) = core::str::from_utf8(data) {
        let _ = parse_duration(text);
    }
}

/// Anything that parses must also format and re-parse without panicking
pub fn fuzz_round_trip(data: &[u8]) {
    use isodur_core::parse_duration;

    if let Ok(text) = core::str::from_utf8(data) {
        if let Ok(duration) = parse_duration(text) {
            let rendered = duration.to_string();
            let _ = parse_duration(&rendered);
        }
    }
}

/// Fixed-length span formatting must accept the whole i64 range
pub fn fuzz_format_nanos(data: &[u8]) {
    use isodur_core::format_nanos;

    if data.len() >= 8 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&data[..8]);
        let _ = format_nanos(i64::from_le_bytes(raw));
    }
}
