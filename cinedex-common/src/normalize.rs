//! Field normalizers for raw dataset cells
//!
//! Every function here is total: malformed input maps to a documented
//! default (`0`, `0.0` or `None`) instead of an error, so a bad cell never
//! rejects its row.

use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal number with an optional K/M/B magnitude suffix, whole string
static SCALED_COUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+(?:\.\d+)?)([KMB]?)$").expect("scaled count pattern is valid")
});

/// Parse an integer, keeping only ASCII digits and minus signs.
///
/// Returns `0` when nothing parseable remains.
pub fn parse_int(raw: &str) -> i32 {
    parse_optional_int(raw).unwrap_or(0)
}

/// Parse an integer where "unknown" must stay distinct from zero.
///
/// Same cleanup as [`parse_int`], but blank or unparseable input yields
/// `None`.
pub fn parse_optional_int(raw: &str) -> Option<i32> {
    if raw.trim().is_empty() {
        return None;
    }

    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    clean.parse().ok()
}

/// Parse a float with a fixed `.` decimal separator.
///
/// Everything except digits, `.` and `-` is discarded first; failure
/// yields `0.0`.
pub fn parse_float(raw: &str) -> f64 {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    clean
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse human-scaled counts such as `"(2.9M)"` or `"1.2K"`.
///
/// Surrounding parentheses and spaces are trimmed, then the whole string
/// must be a decimal number with an optional `K`, `M` or `B` suffix
/// (case-insensitive). The scaled value is truncated to an integer. When
/// the pattern does not match, all digits of the original text are parsed
/// as a plain integer instead, and `0` is returned if that fails too.
///
/// # Examples
///
/// ```
/// use cinedex_common::normalize::parse_scaled_count;
///
/// assert_eq!(parse_scaled_count("(2.9M)"), 2_900_000);
/// assert_eq!(parse_scaled_count("1.2K"), 1_200);
/// assert_eq!(parse_scaled_count("500"), 500);
/// assert_eq!(parse_scaled_count("abc"), 0);
/// ```
pub fn parse_scaled_count(raw: &str) -> u64 {
    if raw.trim().is_empty() {
        return 0;
    }

    let trimmed = raw.trim_matches(|c| c == '(' || c == ')' || c == ' ');

    if let Some(caps) = SCALED_COUNT.captures(trimmed) {
        if let Ok(number) = caps[1].parse::<f64>() {
            let multiplier = match caps[2].to_ascii_uppercase().as_str() {
                "K" => 1_000.0,
                "M" => 1_000_000.0,
                "B" => 1_000_000_000.0,
                _ => 1.0,
            };
            // Float-to-int `as` truncates toward zero and saturates
            return (number * multiplier) as u64;
        }
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Trim a text cell; blank becomes `None`
pub fn text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_strips_noise() {
        assert_eq!(parse_int("1994"), 1994);
        assert_eq!(parse_int("(1994)"), 1994);
        assert_eq!(parse_int("  42. "), 42);
        assert_eq!(parse_int("-7"), -7);
    }

    #[test]
    fn test_parse_int_defaults_to_zero() {
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("   "), 0);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int("1-2"), 0);
        assert_eq!(parse_int("99999999999999"), 0);
    }

    #[test]
    fn test_parse_optional_int_distinguishes_absence_from_zero() {
        assert_eq!(parse_optional_int("0"), Some(0));
        assert_eq!(parse_optional_int(""), None);
        assert_eq!(parse_optional_int("  "), None);
        assert_eq!(parse_optional_int("n/a"), None);
        assert_eq!(parse_optional_int("82"), Some(82));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("9.3"), 9.3);
        assert_eq!(parse_float(" 8.6/10"), 8.61);
        assert_eq!(parse_float("rating: 7.5"), 7.5);
        assert_eq!(parse_float(""), 0.0);
        assert_eq!(parse_float("..."), 0.0);
        assert_eq!(parse_float("1.2.3"), 0.0);
    }

    #[test]
    fn test_parse_scaled_count() {
        assert_eq!(parse_scaled_count("(2.9M)"), 2_900_000);
        assert_eq!(parse_scaled_count("(2M)"), 2_000_000);
        assert_eq!(parse_scaled_count("500"), 500);
        assert_eq!(parse_scaled_count("1.2K"), 1_200);
        assert_eq!(parse_scaled_count("1.5k"), 1_500);
        assert_eq!(parse_scaled_count("2B"), 2_000_000_000);
        assert_eq!(parse_scaled_count(""), 0);
        assert_eq!(parse_scaled_count("abc"), 0);
    }

    #[test]
    fn test_parse_scaled_count_falls_back_to_digits() {
        // Thousands separators don't match the pattern
        assert_eq!(parse_scaled_count("1,234,567"), 1_234_567);
        assert_eq!(parse_scaled_count("(12 ratings)"), 12);
        assert_eq!(parse_scaled_count("2.5X"), 25);
    }

    #[test]
    fn test_text_trims_and_nulls_blank() {
        assert_eq!(text("  PG-13 "), Some("PG-13".to_string()));
        assert_eq!(text(""), None);
        assert_eq!(text("   "), None);
    }
}
