use super::aggregate::Client;
use crate::shared::aggregate::{average, format_fixed, sum_by};
use crate::shared::indicators::Kpi;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientSummary {
    pub total_clients: usize,
    pub total_reservations: u32,
    /// `None` when there are no clients.
    pub average_reservations: Option<f64>,
}

impl ClientSummary {
    pub fn from_catalog(catalog: &[Client]) -> Self {
        let total = sum_by(catalog, |c| c.total_reservations as f64);
        Self {
            total_clients: catalog.len(),
            total_reservations: total as u32,
            average_reservations: average(total, catalog.len()),
        }
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        vec![
            Kpi::new("Total Clients", self.total_clients.to_string(), "users"),
            Kpi::new(
                "Total Reservations",
                self.total_reservations.to_string(),
                "calendar",
            ),
            Kpi::new(
                "Avg. Reservations",
                format_fixed(self.average_reservations, 1),
                "trending-up",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_client::seed::clients;
    use crate::shared::aggregate::MISSING_VALUE;

    #[test]
    fn test_seeded_summary() {
        let summary = ClientSummary::from_catalog(&clients());
        assert_eq!(summary.total_clients, 5);
        assert_eq!(summary.total_reservations, 19);
        let kpis = summary.kpis();
        assert_eq!(kpis[2].value, "3.8");
    }

    #[test]
    fn test_empty_catalog_has_no_average() {
        let summary = ClientSummary::from_catalog(&[]);
        assert_eq!(summary.total_clients, 0);
        assert_eq!(summary.total_reservations, 0);
        assert_eq!(summary.average_reservations, None);
        assert_eq!(summary.kpis()[2].value, MISSING_VALUE);
    }
}
