//! Parse and re-render a handful of ISO 8601 durations

use isodur_core::{format_nanos, parse_duration};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Isodur Round-Trip Example\n");

    for text in ["P3Y6M4DT12H30M5S", "P1.5D", "PT0.5H", "-P1DT1H", "P"] {
        let duration = parse_duration(text)?;
        println!("{:>20} -> {}", text, duration);
    }

    // Lossy fold into a fixed-length span and back
    let duration = parse_duration("PT1H30M")?;
    let nanos = duration.to_nanos()?;
    println!("\nPT1H30M = {} ns = {}", nanos, format_nanos(nanos));

    Ok(())
}
