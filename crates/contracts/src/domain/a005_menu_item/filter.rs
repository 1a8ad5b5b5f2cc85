use super::aggregate::MenuItem;
use crate::shared::filter::{CatalogFilter, CategoryFilter, Searchable, TextQuery};

/// Menu page: search by dish name, select by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemFilter {
    pub query: TextQuery,
    pub category: CategoryFilter<String>,
}

impl MenuItemFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_category(mut self, value: &str) -> Self {
        self.category = CategoryFilter::from_category(value);
        self
    }
}

impl CatalogFilter<MenuItem> for MenuItemFilter {
    fn matches(&self, item: &MenuItem) -> bool {
        self.category.matches(&item.category) && item.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty() && self.category.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_menu_item::seed::menu_items;

    fn names(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_category_selector() {
        let out = MenuItemFilter::default()
            .with_category("Main Course")
            .apply(&menu_items());
        assert_eq!(
            names(&out),
            vec!["Grilled Chicken Plate", "Fresh Fish", "Griot with Plantains"]
        );
    }

    #[test]
    fn test_search_is_name_only() {
        let catalog = menu_items();
        assert_eq!(
            names(&MenuItemFilter::default().with_query("fresh").apply(&catalog)),
            vec!["Fresh Fish", "Fresh Orange Juice"]
        );
        // "ganache" appears only in a description
        assert!(MenuItemFilter::default()
            .with_query("ganache")
            .apply(&catalog)
            .is_empty());
    }

    #[test]
    fn test_all_sentinel_clears_category() {
        let filter = MenuItemFilter::default().with_category("all");
        assert!(filter.is_default());
        assert_eq!(filter.apply(&menu_items()).len(), 6);
    }
}
