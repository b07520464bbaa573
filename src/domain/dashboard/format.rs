//! Display formatting for measurement values.

use crate::domain::plan::parse_number;

const NOT_AVAILABLE: &str = "N/A";
const MAX_FRACTION_DIGITS: i32 = 3;

/// Formats raw value text for display.
///
/// Empty text reads `"N/A"`, non-numeric text passes through unchanged, and
/// numbers get thousands separators with up to three decimals, followed by
/// the unit when one is given: `"1234.5"` with `kg` becomes `"1,234.5 kg"`.
pub fn format_value(text: &str, unit: Option<&str>) -> String {
    let text = text.trim();
    if text.is_empty() {
        return NOT_AVAILABLE.to_string();
    }
    let Some(number) = parse_number(text) else {
        return text.to_string();
    };
    let grouped = group_thousands(number);
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{grouped} {unit}"),
        None => grouped,
    }
}

/// Signed variance, e.g. `"+2 minutes"` or `"-36"`.
///
/// The variance is rounded to two decimals before grouping.
pub fn format_variance(variance: f64, unit: Option<&str>) -> String {
    let sign = if variance >= 0.0 { "+" } else { "" };
    format!("{sign}{}", format_value(&format!("{variance:.2}"), unit))
}

/// Percentage with one decimal, e.g. `"85.0%"`.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Groups the integer part with commas and trims the fraction to at most
/// three significant decimals.
pub fn group_thousands(number: f64) -> String {
    let scale = 10f64.powi(MAX_FRACTION_DIGITS);
    let rounded = (number.abs() * scale).round() / scale;
    let negative = number < 0.0 && rounded != 0.0;

    let plain = format!("{rounded}");
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 2);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_not_available() {
        assert_eq!(format_value("", Some("kg")), "N/A");
        assert_eq!(format_value("   ", None), "N/A");
    }

    #[test]
    fn non_numeric_text_passes_through() {
        assert_eq!(format_value("pending", Some("kg")), "pending");
    }

    #[test]
    fn groups_thousands_with_unit() {
        assert_eq!(format_value("1234.5", Some("kg")), "1,234.5 kg");
        assert_eq!(format_value("1000000", None), "1,000,000");
        assert_eq!(format_value("999", None), "999");
    }

    #[test]
    fn keeps_at_most_three_decimals() {
        assert_eq!(format_value("3.14159", None), "3.142");
        assert_eq!(format_value("2.50", None), "2.5");
    }

    #[test]
    fn lenient_prefix_is_formatted() {
        assert_eq!(format_value("85%", None), "85");
    }

    #[test]
    fn negative_numbers_keep_sign() {
        assert_eq!(group_thousands(-1234.0), "-1,234");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[test]
    fn variance_is_signed() {
        assert_eq!(format_variance(2.0, Some("minutes")), "+2 minutes");
        assert_eq!(format_variance(0.0, None), "+0");
        assert_eq!(format_variance(-36.0, None), "-36");
        assert_eq!(format_variance(-1234.567, None), "-1,234.57");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(83.333), "83.3%");
        assert_eq!(format_percent(100.0), "100.0%");
    }
}
