use super::aggregate::{Payment, PaymentStatus};
use crate::domain::common::Currency;
use crate::shared::aggregate::{count_where, sum_by};
use crate::shared::format::format_amount;
use crate::shared::indicators::Kpi;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSummary {
    /// Sum over completed payments only.
    pub total_revenue: f64,
    pub pending: usize,
    pub completed_on_day: usize,
}

impl PaymentSummary {
    pub fn from_catalog(catalog: &[Payment], business_date: NaiveDate) -> Self {
        let completed: Vec<&Payment> = catalog
            .iter()
            .filter(|p| p.status == PaymentStatus::Completed)
            .collect();
        Self {
            total_revenue: sum_by(&completed, |p| p.amount),
            pending: count_where(catalog, |p| p.status == PaymentStatus::Pending),
            completed_on_day: count_where(&completed, |p| p.date == business_date),
        }
    }

    pub fn kpis(&self, currency: Currency) -> Vec<Kpi> {
        vec![
            Kpi::new(
                "Total Revenue",
                format_amount(self.total_revenue, currency),
                "dollar-sign",
            ),
            Kpi::new("Pending Payments", self.pending.to_string(), "clock"),
            Kpi::new("Completed Today", self.completed_on_day.to_string(), "check-circle"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_payment::seed::payments;
    use crate::domain::common::ymd;

    #[test]
    fn test_seeded_summary() {
        let summary = PaymentSummary::from_catalog(&payments(), ymd(2025, 11, 3));
        assert_eq!(summary.total_revenue, 19500.0);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.completed_on_day, 1);
        assert_eq!(summary.kpis(Currency::Htg)[0].value, "19,500 HTG");
    }

    #[test]
    fn test_kpi_amount_uses_row_currency() {
        let catalog = payments();
        let summary = PaymentSummary::from_catalog(&catalog, ymd(2025, 11, 3));
        let revenue = &summary.kpis(crate::data::CATALOG_CURRENCY)[0].value;
        for payment in &catalog {
            assert!(revenue.ends_with(payment.currency.code()));
        }
    }

    #[test]
    fn test_empty_catalog() {
        let summary = PaymentSummary::from_catalog(&[], ymd(2025, 11, 3));
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.pending, 0);
        assert_eq!(summary.completed_on_day, 0);
    }
}
