//! KPI arithmetic over catalogs.
//!
//! Sums and counts over an empty catalog are zero. Ratios and averages with a
//! zero denominator are `None` and render as [`MISSING_VALUE`], never NaN.

use crate::shared::format::to_fixed;

/// Placeholder rendered for an undefined ratio or average.
pub const MISSING_VALUE: &str = "—";

pub fn sum_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(value).sum()
}

pub fn count_where<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> usize {
    items.iter().filter(|item| predicate(item)).count()
}

/// `part / whole`, or `None` when the denominator is zero or the result is not finite.
pub fn ratio(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        return None;
    }
    let value = part / whole;
    value.is_finite().then_some(value)
}

/// `(part / whole) × 100` with the same zero guard as [`ratio`].
pub fn percentage(part: f64, whole: f64) -> Option<f64> {
    ratio(part, whole).map(|r| r * 100.0)
}

/// `sum / count`, or `None` for an empty input.
pub fn average(sum: f64, count: usize) -> Option<f64> {
    ratio(sum, count as f64)
}

/// Fixed-point rendering of a guarded value.
pub fn format_fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => to_fixed(v, decimals),
        None => MISSING_VALUE.to_string(),
    }
}

/// Like [`format_fixed`] with a trailing `%` on defined values.
pub fn format_percent(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(_) => format!("{}%", format_fixed(value, decimals)),
        None => MISSING_VALUE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_count_over_empty_catalog() {
        let empty: Vec<u32> = Vec::new();
        assert_eq!(sum_by(&empty, |v| *v as f64), 0.0);
        assert_eq!(count_where(&empty, |_| true), 0);
    }

    #[test]
    fn test_sum_and_average_of_client_reservations() {
        let counts = [5u32, 3, 8];
        let total = sum_by(&counts, |v| *v as f64);
        assert_eq!(total, 16.0);
        assert_eq!(format_fixed(average(total, counts.len()), 1), "5.3");
    }

    #[test]
    fn test_zero_denominator_is_guarded() {
        assert_eq!(ratio(0.0, 0.0), None);
        assert_eq!(ratio(5.0, 0.0), None);
        assert_eq!(percentage(1.0, 0.0), None);
        assert_eq!(average(0.0, 0), None);
        assert_eq!(format_fixed(ratio(0.0, 0.0), 2), MISSING_VALUE);
        assert_eq!(format_percent(None, 0), MISSING_VALUE);
    }

    #[test]
    fn test_percentage_formatting() {
        assert_eq!(format_percent(percentage(1.0, 4.0), 0), "25%");
        assert_eq!(format_percent(percentage(8.0, 30.0), 1), "26.7%");
        assert_eq!(format_percent(percentage(0.0, 4.0), 1), "0.0%");
    }

    #[test]
    fn test_tie_values_round_up() {
        assert_eq!(format_percent(percentage(1.0, 8.0), 0), "13%");
        assert_eq!(format_fixed(Some(0.25), 1), "0.3");
        assert_eq!(format_fixed(average(5.0, 2), 0), "3");
    }

    #[test]
    fn test_count_where_predicate() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(count_where(&values, |v| v % 2 == 1), 3);
    }
}
