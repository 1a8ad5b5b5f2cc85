//! Reports page: revenue breakdown and the financial summary.

use crate::dashboards::revenue::RevenuePoint;
use crate::domain::common::Currency;
use crate::shared::aggregate::{format_percent, percentage, sum_by};
use crate::shared::format::{format_amount, format_number_int};
use crate::shared::indicators::Kpi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTab {
    #[default]
    Revenue,
    Occupancy,
    Restaurant,
    Financial,
}

impl ReportTab {
    pub fn code(&self) -> &'static str {
        match self {
            ReportTab::Revenue => "revenue",
            ReportTab::Occupancy => "occupancy",
            ReportTab::Restaurant => "restaurant",
            ReportTab::Financial => "financial",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportTab::Revenue => "Revenue",
            ReportTab::Occupancy => "Occupancy",
            ReportTab::Restaurant => "Restaurant",
            ReportTab::Financial => "Financial",
        }
    }

    pub fn all() -> [ReportTab; 4] {
        [
            ReportTab::Revenue,
            ReportTab::Occupancy,
            ReportTab::Restaurant,
            ReportTab::Financial,
        ]
    }
}

/// Date range selector. Display-only: the series is not re-sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportRange {
    #[default]
    Last7Days,
    Last30Days,
    Last90Days,
    ThisYear,
}

impl ReportRange {
    pub fn code(&self) -> &'static str {
        match self {
            ReportRange::Last7Days => "7days",
            ReportRange::Last30Days => "30days",
            ReportRange::Last90Days => "90days",
            ReportRange::ThisYear => "year",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        ReportRange::all().into_iter().find(|r| r.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportRange::Last7Days => "Last 7 days",
            ReportRange::Last30Days => "Last 30 days",
            ReportRange::Last90Days => "Last 90 days",
            ReportRange::ThisYear => "This year",
        }
    }

    pub fn all() -> [ReportRange; 4] {
        [
            ReportRange::Last7Days,
            ReportRange::Last30Days,
            ReportRange::Last90Days,
            ReportRange::ThisYear,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueReport {
    pub room_revenue: f64,
    pub restaurant_revenue: f64,
    pub operating_expenses: f64,
}

impl RevenueReport {
    pub fn compute(series: &[RevenuePoint], operating_expenses: f64) -> Self {
        Self {
            room_revenue: sum_by(series, |p| p.rooms),
            restaurant_revenue: sum_by(series, |p| p.restaurant),
            operating_expenses,
        }
    }

    pub fn total_revenue(&self) -> f64 {
        self.room_revenue + self.restaurant_revenue
    }

    pub fn room_share(&self) -> Option<f64> {
        percentage(self.room_revenue, self.total_revenue())
    }

    pub fn restaurant_share(&self) -> Option<f64> {
        percentage(self.restaurant_revenue, self.total_revenue())
    }

    pub fn net_profit(&self) -> f64 {
        self.total_revenue() - self.operating_expenses
    }

    /// Net profit over gross revenue; `None` without revenue.
    pub fn profit_margin(&self) -> Option<f64> {
        percentage(self.net_profit(), self.total_revenue())
    }

    pub fn kpis(&self, currency: Currency) -> Vec<Kpi> {
        vec![
            Kpi::new(
                "Total Revenue",
                format_amount(self.total_revenue(), currency),
                "dollar-sign",
            ),
            Kpi::new(
                "Room Revenue",
                format_amount(self.room_revenue, currency),
                "bed",
            )
            .with_subtitle(format!("{} of total", format_percent(self.room_share(), 0))),
            Kpi::new(
                "Restaurant Revenue",
                format_amount(self.restaurant_revenue, currency),
                "utensils",
            )
            .with_subtitle(format!(
                "{} of total",
                format_percent(self.restaurant_share(), 0)
            )),
        ]
    }

    /// Label/value rows of the financial summary card.
    pub fn financial_rows(&self, currency: Currency) -> Vec<(&'static str, String)> {
        vec![
            ("Gross Revenue", format_amount(self.total_revenue(), currency)),
            (
                "Operating Expenses",
                format_amount(self.operating_expenses, currency),
            ),
            (
                "Net Profit",
                format!("{} {}", format_number_int(self.net_profit()), currency.code()),
            ),
            ("Profit Margin", format_percent(self.profit_margin(), 1)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::revenue::revenue_series;
    use crate::shared::aggregate::MISSING_VALUE;

    #[test]
    fn test_seeded_report() {
        let report = RevenueReport::compute(&revenue_series(), 15200.0);
        assert_eq!(report.room_revenue, 69400.0);
        assert_eq!(report.restaurant_revenue, 27300.0);
        assert_eq!(report.total_revenue(), 96700.0);
        assert_eq!(report.net_profit(), 81500.0);

        let kpis = report.kpis(Currency::Htg);
        assert_eq!(kpis[0].value, "96,700 HTG");
        assert_eq!(kpis[1].subtitle.as_deref(), Some("72% of total"));
        assert_eq!(kpis[2].subtitle.as_deref(), Some("28% of total"));

        let rows = report.financial_rows(Currency::Htg);
        assert_eq!(rows[2], ("Net Profit", "81,500 HTG".to_string()));
        assert_eq!(rows[3], ("Profit Margin", "84.3%".to_string()));
    }

    #[test]
    fn test_empty_series_guards_shares() {
        let report = RevenueReport::compute(&[], 15200.0);
        assert_eq!(report.total_revenue(), 0.0);
        assert_eq!(report.room_share(), None);
        assert_eq!(report.profit_margin(), None);
        assert_eq!(report.financial_rows(Currency::Htg)[3].1, MISSING_VALUE);
        assert_eq!(report.net_profit(), -15200.0);
    }

    #[test]
    fn test_range_codes() {
        for range in ReportRange::all() {
            assert_eq!(ReportRange::from_code(range.code()), Some(range));
        }
        assert_eq!(ReportRange::from_code("forever"), None);
    }
}
