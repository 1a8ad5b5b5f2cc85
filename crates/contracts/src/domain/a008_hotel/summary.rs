use super::aggregate::{Hotel, HotelStatus};
use crate::domain::common::Currency;
use crate::shared::aggregate::{count_where, sum_by};
use crate::shared::format::format_amount;
use crate::shared::indicators::{Kpi, Trend};

/// Platform-wide totals for the super admin page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformSummary {
    pub total_hotels: usize,
    pub active_hotels: usize,
    pub monthly_revenue: f64,
    pub total_rooms: u32,
}

impl PlatformSummary {
    pub fn from_catalog(catalog: &[Hotel]) -> Self {
        Self {
            total_hotels: catalog.len(),
            active_hotels: count_where(catalog, |h| h.status == HotelStatus::Active),
            monthly_revenue: sum_by(catalog, |h| h.mrr),
            total_rooms: catalog.iter().map(|h| h.total_rooms).sum(),
        }
    }

    /// Growth figures are fixed display values; there is no history to derive them from.
    pub fn kpis(&self, currency: Currency) -> Vec<Kpi> {
        vec![
            Kpi::new("Total Hotels", self.total_hotels.to_string(), "building")
                .with_subtitle(format!("{} active", self.active_hotels)),
            Kpi::new(
                "Monthly Revenue",
                format_amount(self.monthly_revenue, currency),
                "dollar-sign",
            )
            .with_trend(Trend::up(15.0))
            .with_subtitle("vs last month"),
            Kpi::new("Total Rooms", self.total_rooms.to_string(), "bed"),
            Kpi::new("Growth Rate", "23%", "trending-up")
                .with_trend(Trend::up(5.0))
                .with_subtitle("new signups"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_hotel::seed::hotels;

    #[test]
    fn test_seeded_summary() {
        let summary = PlatformSummary::from_catalog(&hotels());
        assert_eq!(summary.total_hotels, 6);
        assert_eq!(summary.active_hotels, 3);
        assert_eq!(summary.monthly_revenue, 10500.0);
        assert_eq!(summary.total_rooms, 192);
        let kpis = summary.kpis(Currency::Htg);
        assert_eq!(kpis[0].subtitle.as_deref(), Some("3 active"));
        assert_eq!(kpis[1].value, "10,500 HTG");
    }
}
