use contracts::domain::a008_hotel::HotelFilter;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct HotelListState {
    pub search: RwSignal<String>,
}

impl HotelListState {
    pub fn filter(&self) -> HotelFilter {
        HotelFilter::default().with_query(&self.search.get())
    }
}

pub fn create_state() -> HotelListState {
    HotelListState {
        search: RwSignal::new(String::new()),
    }
}
