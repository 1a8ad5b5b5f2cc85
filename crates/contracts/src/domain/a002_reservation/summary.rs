use super::aggregate::{Reservation, ReservationStatus};
use crate::shared::aggregate::count_where;
use crate::shared::indicators::Kpi;
use chrono::NaiveDate;

/// Status counters shown above the reservations table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReservationSummary {
    pub confirmed: usize,
    pub checked_in: usize,
    pub pending: usize,
}

impl ReservationSummary {
    pub fn from_catalog(catalog: &[Reservation]) -> Self {
        let count = |status: ReservationStatus| count_where(catalog, |r| r.status == status);
        Self {
            confirmed: count(ReservationStatus::Confirmed),
            checked_in: count(ReservationStatus::CheckedIn),
            pending: count(ReservationStatus::Pending),
        }
    }

    pub fn kpis(&self) -> Vec<Kpi> {
        vec![
            Kpi::new("Confirmed", self.confirmed.to_string(), "calendar")
                .with_subtitle("Awaiting check-in"),
            Kpi::new("Checked In", self.checked_in.to_string(), "calendar")
                .with_subtitle("Currently staying"),
            Kpi::new("Pending", self.pending.to_string(), "calendar")
                .with_subtitle("Needs confirmation"),
        ]
    }
}

/// Reservations whose check-in falls on `day`.
pub fn check_ins_on(catalog: &[Reservation], day: NaiveDate) -> usize {
    count_where(catalog, |r| r.check_in == day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_reservation::seed::reservations;
    use crate::domain::common::ymd;

    #[test]
    fn test_summary_counts() {
        let summary = ReservationSummary::from_catalog(&reservations());
        assert_eq!(
            summary,
            ReservationSummary { confirmed: 1, checked_in: 1, pending: 1 }
        );
        assert_eq!(ReservationSummary::from_catalog(&[]), ReservationSummary::default());
    }

    #[test]
    fn test_kpi_cards() {
        let kpis = ReservationSummary::from_catalog(&reservations()).kpis();
        let titles: Vec<&str> = kpis.iter().map(|k| k.title.as_str()).collect();
        assert_eq!(titles, ["Confirmed", "Checked In", "Pending"]);
        assert!(kpis.iter().all(|k| k.value == "1"));
    }

    #[test]
    fn test_check_ins_on_day() {
        assert_eq!(check_ins_on(&reservations(), ymd(2025, 11, 3)), 1);
        assert_eq!(check_ins_on(&reservations(), ymd(2025, 12, 25)), 0);
    }
}
