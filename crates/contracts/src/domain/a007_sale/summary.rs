use super::aggregate::Sale;
use crate::domain::common::Currency;
use crate::shared::aggregate::{average, sum_by, MISSING_VALUE};
use crate::shared::format::{format_amount, format_number_int};
use crate::shared::indicators::Kpi;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub transactions: usize,
    /// `None` when there are no transactions.
    pub average_ticket: Option<f64>,
}

impl SalesSummary {
    pub fn from_catalog(catalog: &[Sale]) -> Self {
        let total_sales = sum_by(catalog, |s| s.total);
        Self {
            total_sales,
            transactions: catalog.len(),
            average_ticket: average(total_sales, catalog.len()),
        }
    }

    pub fn kpis(&self, currency: Currency) -> Vec<Kpi> {
        let average_ticket = match self.average_ticket {
            Some(value) => format!("{} {}", format_number_int(value), currency.code()),
            None => MISSING_VALUE.to_string(),
        };
        vec![
            Kpi::new(
                "Total Sales",
                format_amount(self.total_sales, currency),
                "dollar-sign",
            ),
            Kpi::new("Transactions", self.transactions.to_string(), "shopping-cart"),
            Kpi::new("Average Ticket", average_ticket, "trending-up"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_sale::seed::sales;

    #[test]
    fn test_seeded_summary() {
        let summary = SalesSummary::from_catalog(&sales());
        assert_eq!(summary.total_sales, 2690.0);
        assert_eq!(summary.transactions, 5);
        let kpis = summary.kpis(Currency::Htg);
        assert_eq!(kpis[0].value, "2,690 HTG");
        assert_eq!(kpis[2].value, "538 HTG");
    }

    #[test]
    fn test_no_sales_has_no_average() {
        let summary = SalesSummary::from_catalog(&[]);
        assert_eq!(summary.total_sales, 0.0);
        assert_eq!(summary.average_ticket, None);
        assert_eq!(summary.kpis(Currency::Htg)[2].value, MISSING_VALUE);
    }
}
