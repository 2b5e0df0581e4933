//! Property-based tests using proptest

use isodur_core::{format_nanos, parse_duration, Duration};
use proptest::prelude::*;

/// Durations with small non-negative magnitudes and a normalized
/// nanosecond field, the shape every consumer-facing value has
fn small_duration() -> impl Strategy<Value = Duration> {
    (
        0i64..1000,
        0i64..1000,
        0i64..1000,
        0i64..1000,
        0i64..1000,
        0i64..1000,
        0i64..1000,
        0i64..1_000_000_000,
        any::<bool>(),
    )
        .prop_map(
            |(years, months, weeks, days, hours, minutes, seconds, nanoseconds, negative)| {
                Duration {
                    years,
                    months,
                    weeks,
                    days,
                    hours,
                    minutes,
                    seconds,
                    nanoseconds,
                    negative,
                }
            },
        )
}

proptest! {
    #[test]
    fn prop_round_trip_format_parse(d in small_duration()) {
        let text = d.to_string();
        let reparsed = parse_duration(&text).unwrap();
        prop_assert_eq!(reparsed, d);
    }

    #[test]
    fn prop_format_idempotent(d in small_duration()) {
        let once = d.to_string();
        let twice = parse_duration(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_parse_never_panics(text in any::<String>()) {
        // Should never panic, even on arbitrary input
        let _ = parse_duration(&text);
    }

    #[test]
    fn prop_parse_ascii_soup_never_panics(text in "[PTYMWDHS0-9.+-]{0,32}") {
        let _ = parse_duration(&text);
    }

    #[test]
    // i64::MIN is excluded: its magnitude 2^63 cannot be folded back into
    // an i64, so to_nanos reports overflow for it
    fn prop_fixed_length_round_trip(nanos in (i64::MIN + 1)..=i64::MAX) {
        let d = Duration::from_nanos(nanos);
        prop_assert_eq!(d.to_nanos().unwrap(), nanos);

        // And through the text form
        let reparsed = parse_duration(&format_nanos(nanos)).unwrap();
        prop_assert_eq!(reparsed.to_nanos().unwrap(), nanos);
    }

    #[test]
    fn prop_to_nanos_matches_unit_sum(
        days in 0i64..10_000,
        hours in 0i64..10_000,
        seconds in 0i64..10_000,
    ) {
        let d = Duration { days, hours, seconds, ..Duration::default() };
        let expected = days * 86_400_000_000_000
            + hours * 3_600_000_000_000
            + seconds * 1_000_000_000;
        prop_assert_eq!(d.to_nanos().unwrap(), expected);
    }

    #[test]
    fn prop_parsed_nanoseconds_stay_below_one_second(
        text in "[+-]?PT[+-]?[0-9]{0,3}\\.[0-9]{1,30}S",
    ) {
        // Every input here is grammatical: one fraction-bearing final
        // component. However long the fraction, the sub-second remainder
        // must stay within ±999_999_999
        let d = parse_duration(&text).unwrap();
        prop_assert!(
            (-999_999_999..=999_999_999).contains(&d.nanoseconds),
            "nanoseconds out of range for {:?}: {}",
            text,
            d.nanoseconds
        );
    }

    #[test]
    fn prop_parsed_values_render_parseably(text in "P[0-9]{1,5}Y[0-9]{1,5}MT?") {
        // Inputs here may or may not be grammatical; whenever one parses,
        // its rendering must parse back to the same value
        if let Ok(d) = parse_duration(&text) {
            let rendered = d.to_string();
            prop_assert_eq!(parse_duration(&rendered).unwrap(), d);
        }
    }
}
