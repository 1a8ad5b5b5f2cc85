use contracts::domain::a001_room::RoomFilter;
use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RoomListState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl RoomListState {
    pub fn filter(&self) -> RoomFilter {
        RoomFilter::default()
            .with_query(&self.search.get())
            .with_status(&self.status.get())
    }
}

pub fn create_state() -> RoomListState {
    RoomListState {
        search: RwSignal::new(String::new()),
        status: RwSignal::new(ALL_SENTINEL.to_string()),
    }
}
