use super::aggregate::{Reservation, ReservationStatus};
use crate::shared::filter::{CatalogFilter, CategoryFilter, Searchable, TextQuery};

/// Reservations page: search by guest name or room number, select by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservationFilter {
    pub query: TextQuery,
    pub status: CategoryFilter<ReservationStatus>,
}

impl ReservationFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_status(mut self, value: &str) -> Self {
        self.status = CategoryFilter::from_select_value(value, ReservationStatus::from_code);
        self
    }
}

impl CatalogFilter<Reservation> for ReservationFilter {
    fn matches(&self, reservation: &Reservation) -> bool {
        self.status.matches(&reservation.status) && reservation.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty() && self.status.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_reservation::seed::reservations;
    use crate::shared::filter::{empty_state, EmptyState};

    fn ids(items: &[Reservation]) -> Vec<&str> {
        items.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_guest_or_room() {
        let catalog = reservations();
        assert_eq!(
            ids(&ReservationFilter::default().with_query("MICHEL").apply(&catalog)),
            vec!["res-002"]
        );
        assert_eq!(
            ids(&ReservationFilter::default().with_query("310").apply(&catalog)),
            vec!["res-003"]
        );
    }

    #[test]
    fn test_status_filter() {
        let catalog = reservations();
        let out = ReservationFilter::default().with_status("checked_in").apply(&catalog);
        assert_eq!(ids(&out), vec!["res-002"]);
        let out = ReservationFilter::default().with_status("all").apply(&catalog);
        assert_eq!(out, catalog);
    }

    #[test]
    fn test_no_match_is_distinguished_from_no_records() {
        let catalog = reservations();
        let filter = ReservationFilter::default()
            .with_query("Pierre")
            .with_status("cancelled");
        let out = filter.apply(&catalog);
        assert!(out.is_empty());
        assert_eq!(
            empty_state(out.len(), filter.is_default()),
            Some(EmptyState::NoMatches)
        );

        let filter = ReservationFilter::default();
        let out = filter.apply(&[]);
        assert_eq!(
            empty_state(out.len(), filter.is_default()),
            Some(EmptyState::NoRecords)
        );
    }
}
