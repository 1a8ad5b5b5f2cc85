//! Compiled-in catalogs.

use crate::dashboards::revenue::{revenue_series, RevenuePoint};
use crate::domain::a001_room::{self, Room};
use crate::domain::a002_reservation::{self, Reservation};
use crate::domain::a003_client::{self, Client};
use crate::domain::a004_payment::{self, Payment};
use crate::domain::a005_menu_item::{self, MenuItem};
use crate::domain::a006_inventory_item::{self, InventoryItem};
use crate::domain::a007_sale::{self, Sale};
use crate::domain::a008_hotel::{self, Hotel};
use crate::domain::common::Currency;
use crate::system::session::{hotel_options, HotelOption};
use crate::system::team::{team_members, TeamMember};
use once_cell::sync::Lazy;

/// Currency every seeded amount is recorded in. Page totals are labelled with it;
/// the regional currency setting does not convert amounts.
pub const CATALOG_CURRENCY: Currency = Currency::Htg;

/// Every catalog the pages render. `Default` is the empty set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalogs {
    pub rooms: Vec<Room>,
    pub reservations: Vec<Reservation>,
    pub clients: Vec<Client>,
    pub payments: Vec<Payment>,
    pub menu_items: Vec<MenuItem>,
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<Sale>,
    pub hotels: Vec<Hotel>,
    pub revenue: Vec<RevenuePoint>,
    pub team: Vec<TeamMember>,
    pub hotel_options: Vec<HotelOption>,
}

impl Catalogs {
    pub fn seeded() -> Self {
        Self {
            rooms: a001_room::seed::rooms(),
            reservations: a002_reservation::seed::reservations(),
            clients: a003_client::seed::clients(),
            payments: a004_payment::seed::payments(),
            menu_items: a005_menu_item::seed::menu_items(),
            inventory: a006_inventory_item::seed::inventory_items(),
            sales: a007_sale::seed::sales(),
            hotels: a008_hotel::seed::hotels(),
            revenue: revenue_series(),
            team: team_members(),
            hotel_options: hotel_options(),
        }
    }

    pub fn reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn hotel(&self, name: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.name == name)
    }
}

pub static CATALOGS: Lazy<Catalogs> = Lazy::new(Catalogs::seeded);

/// Shared seeded catalogs, built on first access.
pub fn catalogs() -> &'static Catalogs {
    &CATALOGS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sizes() {
        let c = catalogs();
        assert_eq!(c.rooms.len(), 6);
        assert_eq!(c.reservations.len(), 5);
        assert_eq!(c.clients.len(), 5);
        assert_eq!(c.payments.len(), 4);
        assert_eq!(c.menu_items.len(), 6);
        assert_eq!(c.inventory.len(), 6);
        assert_eq!(c.sales.len(), 5);
        assert_eq!(c.hotels.len(), 6);
        assert_eq!(c.revenue.len(), 7);
        assert_eq!(c.team.len(), 3);
        assert_eq!(c.hotel_options.len(), 3);
    }

    #[test]
    fn test_keys_are_unique() {
        let c = catalogs();
        let mut numbers: Vec<&str> = c.rooms.iter().map(|r| r.number.as_str()).collect();
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), c.rooms.len());
        let mut names: Vec<&str> = c.hotels.iter().map(|h| h.name.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), c.hotels.len());
    }

    #[test]
    fn test_amounts_share_catalog_currency() {
        let c = catalogs();
        let currencies = c
            .rooms
            .iter()
            .map(|r| r.currency)
            .chain(c.reservations.iter().map(|r| r.currency))
            .chain(c.payments.iter().map(|p| p.currency))
            .chain(c.menu_items.iter().map(|m| m.currency))
            .chain(c.inventory.iter().map(|i| i.currency))
            .chain(c.sales.iter().map(|s| s.currency))
            .chain(c.hotels.iter().map(|h| h.currency));
        for currency in currencies {
            assert_eq!(currency, CATALOG_CURRENCY);
        }
    }

    #[test]
    fn test_lookups() {
        let c = catalogs();
        assert_eq!(c.reservation("res-003").map(|r| r.guest_name.as_str()), Some("Jacques Bernard"));
        assert!(c.reservation("res-999").is_none());
        assert!(c.hotel("Mountain Inn").is_some());
        assert!(Catalogs::default().hotel("Mountain Inn").is_none());
    }
}
