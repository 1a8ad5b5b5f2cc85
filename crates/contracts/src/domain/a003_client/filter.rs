use super::aggregate::Client;
use crate::shared::filter::{CatalogFilter, Searchable, TextQuery};

/// Clients page: search by name, email or phone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientFilter {
    pub query: TextQuery,
}

impl ClientFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }
}

impl CatalogFilter<Client> for ClientFilter {
    fn matches(&self, client: &Client) -> bool {
        client.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_client::seed::clients;

    fn names(items: &[Client]) -> Vec<&str> {
        items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_search_by_each_field() {
        let catalog = clients();
        assert_eq!(
            names(&ClientFilter::default().with_query("sophie").apply(&catalog)),
            vec!["Sophie Michel"]
        );
        assert_eq!(
            names(&ClientFilter::default().with_query("pierre.t@").apply(&catalog)),
            vec!["Pierre Toussaint"]
        );
        assert_eq!(
            names(&ClientFilter::default().with_query("6789-0123").apply(&catalog)),
            vec!["Jacques Bernard"]
        );
    }

    #[test]
    fn test_shared_fragment_keeps_catalog_order() {
        let catalog = clients();
        let out = ClientFilter::default().with_query("@email.com").apply(&catalog);
        assert_eq!(out, catalog);
    }
}
