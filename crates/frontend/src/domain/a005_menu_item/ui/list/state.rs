use contracts::domain::a005_menu_item::MenuItemFilter;
use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MenuItemListState {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
}

impl MenuItemListState {
    pub fn filter(&self) -> MenuItemFilter {
        MenuItemFilter::default()
            .with_query(&self.search.get())
            .with_category(&self.category.get())
    }
}

pub fn create_state() -> MenuItemListState {
    MenuItemListState {
        search: RwSignal::new(String::new()),
        category: RwSignal::new(ALL_SENTINEL.to_string()),
    }
}
