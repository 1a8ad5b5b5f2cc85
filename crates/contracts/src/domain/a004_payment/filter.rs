use super::aggregate::{Payment, PaymentStatus};
use crate::shared::filter::{CatalogFilter, CategoryFilter, Searchable, TextQuery};

/// Payments page: search by guest name or invoice number, select by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentFilter {
    pub query: TextQuery,
    pub status: CategoryFilter<PaymentStatus>,
}

impl PaymentFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_status(mut self, value: &str) -> Self {
        self.status = CategoryFilter::from_select_value(value, PaymentStatus::from_code);
        self
    }
}

impl CatalogFilter<Payment> for PaymentFilter {
    fn matches(&self, payment: &Payment) -> bool {
        self.status.matches(&payment.status) && payment.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty() && self.status.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_payment::seed::payments;

    fn ids(items: &[Payment]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_search_by_invoice_number() {
        let out = PaymentFilter::default().with_query("inv-2025-003").apply(&payments());
        assert_eq!(ids(&out), vec!["pay-003"]);
    }

    #[test]
    fn test_status_and_query_are_conjunctive() {
        let catalog = payments();
        let completed = PaymentFilter::default().with_status("completed").apply(&catalog);
        assert_eq!(ids(&completed), vec!["pay-001", "pay-002", "pay-004"]);

        let both = PaymentFilter::default()
            .with_status("completed")
            .with_query("Jacques")
            .apply(&catalog);
        assert!(both.is_empty());

        let failed = PaymentFilter::default().with_status("failed").apply(&catalog);
        assert!(failed.is_empty());
    }
}
