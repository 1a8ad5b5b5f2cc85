//! Daily revenue series shared by the dashboard chart and the reports page.

use crate::domain::common::ymd;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of revenue split by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub rooms: f64,
    pub restaurant: f64,
}

impl RevenuePoint {
    pub fn total(&self) -> f64 {
        self.rooms + self.restaurant
    }
}

/// Largest daily total in the series, used to scale chart bars. `None` when empty.
pub fn peak_total(series: &[RevenuePoint]) -> Option<f64> {
    series.iter().map(RevenuePoint::total).reduce(f64::max)
}

pub(crate) fn revenue_series() -> Vec<RevenuePoint> {
    let point = |day: NaiveDate, rooms: f64, restaurant: f64| RevenuePoint {
        date: day,
        rooms,
        restaurant,
    };
    vec![
        point(ymd(2025, 10, 28), 8500.0, 3200.0),
        point(ymd(2025, 10, 29), 9200.0, 3800.0),
        point(ymd(2025, 10, 30), 7800.0, 2900.0),
        point(ymd(2025, 10, 31), 10500.0, 4200.0),
        point(ymd(2025, 11, 1), 11200.0, 4500.0),
        point(ymd(2025, 11, 2), 9800.0, 3600.0),
        point(ymd(2025, 11, 3), 12400.0, 5100.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_is_chronological() {
        let series = revenue_series();
        assert_eq!(series.len(), 7);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_peak_total() {
        assert_eq!(peak_total(&revenue_series()), Some(17500.0));
        assert_eq!(peak_total(&[]), None);
    }
}
