//! Restaurant stock levels and the low-stock rule.

use crate::domain::common::Currency;
use crate::shared::aggregate::{count_where, percentage};
use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};

/// Categories offered by the inventory selector.
pub const INVENTORY_CATEGORIES: [&str; 5] =
    ["Grains", "Meat", "Seafood", "Vegetables", "Condiments"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Unique within the catalog.
    pub product_name: String,
    pub category: String,
    pub current_stock: u32,
    pub alert_threshold: u32,
    pub unit: String,
    pub price_per_unit: f64,
    pub currency: Currency,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.current_stock, self.alert_threshold)
    }

    pub fn stock_bar_percentage(&self) -> f64 {
        stock_bar_percentage(self.current_stock, self.alert_threshold)
    }
}

/// Low at or below the threshold.
pub fn is_low_stock(current_stock: u32, alert_threshold: u32) -> bool {
    current_stock <= alert_threshold
}

/// Bar fill: stock measured against twice the threshold, capped at 100.
///
/// With a zero threshold the bar is full for any stock and empty otherwise.
pub fn stock_bar_percentage(current_stock: u32, alert_threshold: u32) -> f64 {
    match percentage(current_stock as f64, 2.0 * alert_threshold as f64) {
        Some(value) => value.min(100.0),
        None if current_stock > 0 => 100.0,
        None => 0.0,
    }
}

pub fn low_stock_count(items: &[InventoryItem]) -> usize {
    count_where(items, InventoryItem::is_low_stock)
}

/// Alert banner text; `None` when nothing is low.
pub fn low_stock_message(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("1 item needs restocking".to_string()),
        n => Some(format!("{n} items need restocking")),
    }
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_inventory_item::seed::inventory_items;
    use crate::shared::aggregate::format_percent;

    #[test]
    fn test_threshold_is_inclusive() {
        assert!(is_low_stock(15, 15));
        assert!(is_low_stock(8, 15));
        assert!(!is_low_stock(16, 15));
        assert!(is_low_stock(0, 0));
    }

    #[test]
    fn test_stock_bar() {
        assert_eq!(format_percent(Some(stock_bar_percentage(8, 15)), 1), "26.7%");
        assert_eq!(stock_bar_percentage(45, 20), 100.0);
        assert_eq!(stock_bar_percentage(20, 20), 50.0);
    }

    #[test]
    fn test_stock_bar_with_zero_threshold() {
        assert_eq!(stock_bar_percentage(3, 0), 100.0);
        assert_eq!(stock_bar_percentage(0, 0), 0.0);
    }

    #[test]
    fn test_seeded_low_stock() {
        let items = inventory_items();
        assert_eq!(low_stock_count(&items), 2);
        let low: Vec<&str> = items
            .iter()
            .filter(|i| i.is_low_stock())
            .map(|i| i.product_name.as_str())
            .collect();
        assert_eq!(low, vec!["Chicken Breast", "Flour"]);
    }

    #[test]
    fn test_low_stock_message() {
        assert_eq!(low_stock_message(0), None);
        assert_eq!(low_stock_message(1).as_deref(), Some("1 item needs restocking"));
        assert_eq!(low_stock_message(2).as_deref(), Some("2 items need restocking"));
    }
}
