//! Number formatting for KPI values and table cells.

use crate::domain::common::Currency;

/// Formats a number with a `,` thousands separator and the given number of decimals.
///
/// ```
/// use contracts::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = to_fixed(value, decimals);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Rounds half away from zero at `decimals` places.
///
/// `format!("{:.N}")` alone rounds exact ties to even ("2" for 2.5).
pub fn round_half_away(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Fixed-point text with ties rounded away from zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", round_half_away(value, decimals), prec = decimals)
}

/// Integer with thousands separator.
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Monetary amount followed by the currency code. Whole amounts drop the decimals.
pub fn format_amount(value: f64, currency: Currency) -> String {
    let decimals = if value.fract() == 0.0 { 0 } else { 2 };
    format!("{} {}", format_number_with_decimals(value, decimals), currency.code())
}

/// Avatar initials: first letter of up to two name words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3), "1,234.567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(12.5, 0), "13");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(26.666, 1), "26.7");
        assert_eq!(format_number_with_decimals(1234.5, 0), "1,235");
        assert_eq!(format_number_with_decimals(0.125, 2), "0.13");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0), "1,234,567");
        assert_eq!(format_number_int(0.0), "0");
        assert_eq!(format_number_int(-81500.0), "-81,500");
        assert_eq!(format_number_int(-100.0), "-100");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(19500.0, Currency::Htg), "19,500 HTG");
        assert_eq!(format_amount(12.5, Currency::Usd), "12.50 USD");
        assert_eq!(format_amount(0.0, Currency::Htg), "0 HTG");
    }
}
