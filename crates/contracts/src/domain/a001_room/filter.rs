use super::aggregate::{Room, RoomStatus};
use crate::shared::filter::{CatalogFilter, CategoryFilter, Searchable, TextQuery};

/// Rooms page: search by number or type, select by status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    pub query: TextQuery,
    pub status: CategoryFilter<RoomStatus>,
}

impl RoomFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_status(mut self, value: &str) -> Self {
        self.status = CategoryFilter::from_select_value(value, RoomStatus::from_code);
        self
    }
}

impl CatalogFilter<Room> for RoomFilter {
    fn matches(&self, room: &Room) -> bool {
        self.status.matches(&room.status) && room.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty() && self.status.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_room::seed::rooms;

    fn numbers(rooms: &[Room]) -> Vec<&str> {
        rooms.iter().map(|r| r.number.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_catalog() {
        let catalog = rooms();
        let filter = RoomFilter::default();
        assert!(filter.is_default());
        assert_eq!(filter.apply(&catalog), catalog);
    }

    #[test]
    fn test_search_by_type_and_number() {
        let catalog = rooms();
        let out = RoomFilter::default().with_query("deluxe").apply(&catalog);
        assert_eq!(numbers(&out), vec!["205", "206"]);

        let out = RoomFilter::default().with_query("31").apply(&catalog);
        assert_eq!(numbers(&out), vec!["310", "311"]);
    }

    #[test]
    fn test_status_and_query_are_conjunctive() {
        let catalog = rooms();
        let filter = RoomFilter::default().with_query("suite").with_status("available");
        assert!(!filter.is_default());
        assert_eq!(numbers(&filter.apply(&catalog)), vec!["206"]);

        let by_query = RoomFilter::default().with_query("suite");
        let by_status = RoomFilter::default().with_status("available");
        assert_eq!(
            by_status.apply(&by_query.apply(&catalog)),
            by_query.apply(&by_status.apply(&catalog))
        );
    }
}
