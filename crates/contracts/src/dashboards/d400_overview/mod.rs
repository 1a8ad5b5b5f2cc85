//! Owner dashboard: headline KPIs over rooms, reservations and revenue.

use crate::dashboards::revenue::RevenuePoint;
use crate::domain::a001_room::{Room, RoomStatus};
use crate::domain::a002_reservation::summary::check_ins_on;
use crate::domain::a002_reservation::{Reservation, ReservationStatus};
use crate::domain::common::Currency;
use crate::shared::aggregate::{count_where, format_percent, percentage};
use crate::shared::format::format_amount;
use crate::shared::indicators::{Kpi, Trend};
use chrono::NaiveDate;

/// Rows shown in the "Today's Reservations" table.
pub const TODAYS_RESERVATIONS_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverviewSummary {
    pub total_rooms: usize,
    pub available_rooms: usize,
    /// `None` when there are no rooms.
    pub occupancy_rate: Option<f64>,
    /// Rooms plus restaurant for the latest point of the revenue series.
    pub revenue_today: f64,
    pub check_ins_today: usize,
    pub pending_reservations: usize,
}

impl OverviewSummary {
    pub fn compute(
        rooms: &[Room],
        reservations: &[Reservation],
        revenue: &[RevenuePoint],
        business_date: NaiveDate,
    ) -> Self {
        let occupied = count_where(rooms, |r| r.status == RoomStatus::Occupied);
        Self {
            total_rooms: rooms.len(),
            available_rooms: count_where(rooms, |r| r.status == RoomStatus::Available),
            occupancy_rate: percentage(occupied as f64, rooms.len() as f64),
            revenue_today: revenue.last().map(RevenuePoint::total).unwrap_or_default(),
            check_ins_today: check_ins_on(reservations, business_date),
            pending_reservations: count_where(reservations, |r| {
                r.status == ReservationStatus::Pending
            }),
        }
    }

    /// Trend figures are fixed display values.
    pub fn kpis(&self, currency: Currency) -> Vec<Kpi> {
        vec![
            Kpi::new("Total Rooms", self.total_rooms.to_string(), "bed")
                .with_subtitle(format!("{} available", self.available_rooms)),
            Kpi::new("Occupancy Rate", format_percent(self.occupancy_rate, 0), "trending-up")
                .with_trend(Trend::up(12.0))
                .with_subtitle("vs last month"),
            Kpi::new(
                "Revenue Today",
                format_amount(self.revenue_today, currency),
                "dollar-sign",
            )
            .with_trend(Trend::up(8.0))
            .with_subtitle("vs yesterday"),
            Kpi::new("Check-ins Today", self.check_ins_today.to_string(), "calendar")
                .with_subtitle(format!("{} pending", self.pending_reservations)),
        ]
    }
}

/// Leading slice of the reservations catalog shown on the dashboard.
pub fn todays_reservations(reservations: &[Reservation]) -> &[Reservation] {
    &reservations[..reservations.len().min(TODAYS_RESERVATIONS_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::revenue::revenue_series;
    use crate::domain::a001_room::seed::rooms;
    use crate::domain::a002_reservation::seed::reservations;
    use crate::domain::common::ymd;
    use crate::shared::aggregate::MISSING_VALUE;

    #[test]
    fn test_seeded_overview() {
        let summary = OverviewSummary::compute(
            &rooms(),
            &reservations(),
            &revenue_series(),
            ymd(2025, 11, 3),
        );
        let kpis = summary.kpis(Currency::Htg);
        let values: Vec<&str> = kpis.iter().map(|k| k.value.as_str()).collect();
        assert_eq!(values, vec!["6", "33%", "17,500 HTG", "1"]);
        assert_eq!(kpis[0].subtitle.as_deref(), Some("2 available"));
        assert_eq!(kpis[3].subtitle.as_deref(), Some("1 pending"));
    }

    #[test]
    fn test_no_rooms_guards_occupancy() {
        let summary = OverviewSummary::compute(&[], &[], &[], ymd(2025, 11, 3));
        assert_eq!(summary.occupancy_rate, None);
        assert_eq!(summary.revenue_today, 0.0);
        assert_eq!(summary.kpis(Currency::Htg)[1].value, MISSING_VALUE);
    }

    #[test]
    fn test_todays_reservations_limit() {
        let all = reservations();
        let ids: Vec<&str> = todays_reservations(&all).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["res-001", "res-002", "res-003"]);
        assert!(todays_reservations(&[]).is_empty());
    }
}
