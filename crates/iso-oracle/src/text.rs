//! Parsing of human-readable durations as returned by distance-matrix
//! services ("45 mins", "1 hour 5 mins", "2 days 3 hours").
//!
//! Adapters should prefer a numeric seconds field when the service offers
//! one; this exists for services (and cached responses) that only carry text.

use iso_core::{IsoError, IsoResult};

/// Parse `text` into minutes.
///
/// The text must be a sequence of `<integer> <unit>` pairs.  Recognised units
/// (singular or plural, case-insensitive): `day`, `hour`/`hr`, `min`/`minute`,
/// `sec`/`second`.
///
/// # Errors
///
/// [`IsoError::TravelTimeUnavailable`] if the text is empty, has a dangling
/// number, a non-integer amount, or an unknown unit.
pub fn parse_duration_text(text: &str) -> IsoResult<f64> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return Err(malformed(text));
    }

    let mut minutes = 0.0;
    for pair in tokens.chunks_exact(2) {
        let amount: u32 = pair[0].parse().map_err(|_| malformed(text))?;
        let per_unit = unit_minutes(pair[1]).ok_or_else(|| malformed(text))?;
        minutes += amount as f64 * per_unit;
    }
    Ok(minutes)
}

fn unit_minutes(unit: &str) -> Option<f64> {
    let unit = unit.to_ascii_lowercase();
    let unit = unit.trim_end_matches(['s', ',']);
    match unit {
        "day"              => Some(1_440.0),
        "hour" | "hr"      => Some(60.0),
        "min" | "minute"   => Some(1.0),
        "sec" | "second"   => Some(1.0 / 60.0),
        _ => None,
    }
}

fn malformed(text: &str) -> IsoError {
    IsoError::unavailable(format!("unparseable duration text {text:?}"))
}
