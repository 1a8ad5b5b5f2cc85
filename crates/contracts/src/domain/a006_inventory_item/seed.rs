use super::aggregate::InventoryItem;
use crate::domain::common::Currency;

fn inventory_item(
    product_name: &str,
    category: &str,
    current_stock: u32,
    alert_threshold: u32,
    unit: &str,
    price_per_unit: f64,
) -> InventoryItem {
    InventoryItem {
        product_name: product_name.to_string(),
        category: category.to_string(),
        current_stock,
        alert_threshold,
        unit: unit.to_string(),
        price_per_unit,
        currency: Currency::Htg,
    }
}

pub(crate) fn inventory_items() -> Vec<InventoryItem> {
    vec![
        inventory_item("Rice", "Grains", 45, 20, "kg", 150.0),
        inventory_item("Chicken Breast", "Meat", 8, 15, "kg", 450.0),
        inventory_item("Fresh Tomatoes", "Vegetables", 25, 10, "kg", 80.0),
        inventory_item("Olive Oil", "Condiments", 12, 8, "bottle", 280.0),
        inventory_item("Flour", "Grains", 5, 15, "kg", 120.0),
        inventory_item("Fresh Fish", "Seafood", 18, 10, "kg", 550.0),
    ]
}
