//! Lenient numeric parsing for target and actual values.
//!
//! Reads the longest numeric prefix after leading whitespace, so `"85%"`
//! reads as 85 and `"1.5e3 units"` as 1500. Text with no numeric prefix, or
//! a prefix that overflows to infinity, reads as `None`.

/// Parses the numeric prefix of `text`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number("  12.25  "), Some(12.25));
    }

    #[test]
    fn parses_leading_prefix() {
        assert_eq!(parse_number("85%"), Some(85.0));
        assert_eq!(parse_number("1,000"), Some(1.0));
        assert_eq!(parse_number("12 widgets"), Some(12.0));
    }

    #[test]
    fn parses_fraction_without_integer_part() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
    }

    #[test]
    fn parses_exponent_only_when_complete() {
        assert_eq!(parse_number("1.5e3"), Some(1500.0));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number("2e+"), Some(2.0));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("N/A"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("abc12"), None);
    }

    #[test]
    fn rejects_overflow_to_infinity() {
        assert_eq!(parse_number("1e999"), None);
    }
}
