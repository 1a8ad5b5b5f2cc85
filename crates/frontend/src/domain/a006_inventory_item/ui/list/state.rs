use contracts::domain::a006_inventory_item::InventoryFilter;
use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct InventoryListState {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub low_stock_only: RwSignal<bool>,
}

impl InventoryListState {
    pub fn filter(&self) -> InventoryFilter {
        InventoryFilter::default()
            .with_query(&self.search.get())
            .with_category(&self.category.get())
            .with_low_stock_only(self.low_stock_only.get())
    }
}

pub fn create_state() -> InventoryListState {
    InventoryListState {
        search: RwSignal::new(String::new()),
        category: RwSignal::new(ALL_SENTINEL.to_string()),
        low_stock_only: RwSignal::new(false),
    }
}
