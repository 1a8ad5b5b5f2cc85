use super::aggregate::InventoryItem;
use crate::shared::filter::{CatalogFilter, CategoryFilter, Searchable, TextQuery};

/// Inventory page: product search, category selector and the low-stock toggle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryFilter {
    pub query: TextQuery,
    pub category: CategoryFilter<String>,
    pub low_stock_only: bool,
}

impl InventoryFilter {
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_category(mut self, value: &str) -> Self {
        self.category = CategoryFilter::from_category(value);
        self
    }

    pub fn with_low_stock_only(mut self, on: bool) -> Self {
        self.low_stock_only = on;
        self
    }
}

impl CatalogFilter<InventoryItem> for InventoryFilter {
    fn matches(&self, item: &InventoryItem) -> bool {
        self.category.matches(&item.category)
            && (!self.low_stock_only || item.is_low_stock())
            && item.matches_query(&self.query)
    }

    fn is_default(&self) -> bool {
        self.query.is_empty() && self.category.is_all() && !self.low_stock_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_inventory_item::seed::inventory_items;

    fn names(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.product_name.as_str()).collect()
    }

    #[test]
    fn test_low_stock_toggle() {
        let out = InventoryFilter::default()
            .with_low_stock_only(true)
            .apply(&inventory_items());
        assert_eq!(names(&out), vec!["Chicken Breast", "Flour"]);
    }

    #[test]
    fn test_toggle_combines_with_category() {
        let catalog = inventory_items();
        let grains = InventoryFilter::default().with_category("Grains").apply(&catalog);
        assert_eq!(names(&grains), vec!["Rice", "Flour"]);

        let low_grains = InventoryFilter::default()
            .with_category("Grains")
            .with_low_stock_only(true)
            .apply(&catalog);
        assert_eq!(names(&low_grains), vec!["Flour"]);

        let low_seafood = InventoryFilter::default()
            .with_category("Seafood")
            .with_low_stock_only(true);
        assert!(low_seafood.apply(&catalog).is_empty());
        assert!(!low_seafood.is_default());
    }

    #[test]
    fn test_search() {
        let out = InventoryFilter::default().with_query("fresh").apply(&inventory_items());
        assert_eq!(names(&out), vec!["Fresh Tomatoes", "Fresh Fish"]);
    }
}
