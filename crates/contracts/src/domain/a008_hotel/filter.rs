use super::aggregate::Hotel;
use crate::shared::filter::{CatalogFilter, Searchable, TextQuery};

/// Super admin page: search by hotel name or location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilter {
    pub query: TextQuery,
}

impl HotelFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }
}

impl CatalogFilter<Hotel> for HotelFilter {
    fn matches(&self, hotel: &Hotel) -> bool {
        hotel.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_hotel::seed::hotels;

    fn names(items: &[Hotel]) -> Vec<&str> {
        items.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_search_beach_returns_one_hotel() {
        let out = HotelFilter::default().with_query("Beach").apply(&hotels());
        assert_eq!(names(&out), vec!["Beach Resort"]);
    }

    #[test]
    fn test_search_by_location() {
        let out = HotelFilter::default().with_query("port-au-prince").apply(&hotels());
        assert_eq!(names(&out), vec!["Le Grand Hotel", "City Center Hotel"]);
    }

    #[test]
    fn test_empty_query_returns_catalog() {
        let catalog = hotels();
        assert_eq!(HotelFilter::default().apply(&catalog), catalog);
    }
}
