use crate::domain::common::{Currency, Emphasis, Presentation};
use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Free-form; the selector offers whatever categories the catalog contains.
    pub category: String,
    pub price: f64,
    pub currency: Currency,
    pub description: String,
    pub available: bool,
}

impl MenuItem {
    pub const fn availability(&self) -> Presentation {
        if self.available {
            Presentation::new("Available", Emphasis::Positive)
        } else {
            Presentation::new("Unavailable", Emphasis::Neutral)
        }
    }
}

impl Searchable for MenuItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

/// Unique categories in order of first appearance.
pub fn distinct_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.iter().any(|c| c == &item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_menu_item::seed::menu_items;

    #[test]
    fn test_categories_in_first_appearance_order() {
        assert_eq!(
            distinct_categories(&menu_items()),
            vec!["Main Course", "Appetizers", "Beverages", "Desserts"]
        );
        assert!(distinct_categories(&[]).is_empty());
    }

    #[test]
    fn test_availability_badge() {
        let items = menu_items();
        assert_eq!(items[0].availability().emphasis, Emphasis::Positive);
        let cake = items.iter().find(|i| i.name == "Chocolate Cake").unwrap();
        assert_eq!(cake.availability().label, "Unavailable");
        assert_eq!(cake.availability().emphasis, Emphasis::Neutral);
    }
}
