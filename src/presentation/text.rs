//! Entropy and crack-time text.

use crate::presentation::label::NO_LABEL;
use crate::report::CrackTime;

const LESS_THAN_A_SECOND: &str = "less than 1 second";

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const YEAR: f64 = 365.0 * DAY;

// Strictly descending; the first threshold not above the input wins.
const UNITS: [(&str, f64); 5] = [
    ("years", YEAR),
    ("days", DAY),
    ("hours", HOUR),
    ("minutes", MINUTE),
    ("seconds", 1.0),
];

/// `"{bits} bits"` with the entropy rounded to a whole number.
pub fn entropy_text(bits: f64) -> String {
    let bits = if bits.is_finite() { bits.max(0.0) } else { 0.0 };
    format!("{} bits", bits.round() as u64)
}

/// Reduces a duration in seconds to its largest whole unit.
///
/// `3661.0` becomes `"1 hours"`, anything under a second becomes
/// `"less than 1 second"`, and non-finite input becomes `"—"`.
pub fn duration_text(seconds: f64) -> String {
    if !seconds.is_finite() {
        return NO_LABEL.to_string();
    }
    if seconds < 1.0 {
        return LESS_THAN_A_SECOND.to_string();
    }

    UNITS
        .iter()
        .find(|(_, threshold)| seconds >= *threshold)
        .map(|(unit, threshold)| format!("{} {}", (seconds / threshold).round(), unit))
        .unwrap_or_else(|| LESS_THAN_A_SECOND.to_string())
}

pub fn crack_time_text(crack_time: CrackTime) -> String {
    match crack_time {
        CrackTime::Seconds(seconds) => duration_text(seconds),
        CrackTime::Unknown => NO_LABEL.to_string(),
    }
}

/// Entropy line as shown on the page.
pub fn entropy_field(bits: f64) -> String {
    format!("Entropy: {}", entropy_text(bits))
}

/// Crack-time line as shown on the page.
pub fn crack_time_field(crack_time: CrackTime) -> String {
    format!("Estimated crack time: {}", crack_time_text(crack_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_under_a_second() {
        assert_eq!(duration_text(0.5), "less than 1 second");
        assert_eq!(duration_text(0.0), "less than 1 second");
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(duration_text(45.0), "45 seconds");
        assert_eq!(duration_text(1.0), "1 seconds");
    }

    #[test]
    fn test_duration_rounds_at_chosen_unit() {
        assert_eq!(duration_text(3661.0), "1 hours");
        assert_eq!(duration_text(90.0), "2 minutes");
        assert_eq!(duration_text(59.6), "60 seconds");
    }

    #[test]
    fn test_duration_years() {
        assert_eq!(duration_text(31_536_000.0), "1 years");
        assert_eq!(duration_text(1e12), "31710 years");
    }

    #[test]
    fn test_duration_days() {
        assert_eq!(duration_text(3.0 * DAY), "3 days");
    }

    #[test]
    fn test_duration_non_finite() {
        assert_eq!(duration_text(f64::NAN), "—");
        assert_eq!(duration_text(f64::INFINITY), "—");
    }

    #[test]
    fn test_crack_time_unknown() {
        assert_eq!(crack_time_text(CrackTime::Unknown), "—");
        assert_eq!(
            crack_time_field(CrackTime::Seconds(45.0)),
            "Estimated crack time: 45 seconds"
        );
    }

    #[test]
    fn test_entropy_text() {
        assert_eq!(entropy_text(41.6), "42 bits");
        assert_eq!(entropy_text(0.0), "0 bits");
        assert_eq!(entropy_text(f64::NAN), "0 bits");
        assert_eq!(entropy_field(12.2), "Entropy: 12 bits");
    }
}
