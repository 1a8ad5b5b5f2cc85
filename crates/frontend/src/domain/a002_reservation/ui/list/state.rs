use contracts::domain::a002_reservation::ReservationFilter;
use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ReservationListState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl ReservationListState {
    pub fn filter(&self) -> ReservationFilter {
        ReservationFilter::default()
            .with_query(&self.search.get())
            .with_status(&self.status.get())
    }
}

pub fn create_state() -> ReservationListState {
    ReservationListState {
        search: RwSignal::new(String::new()),
        status: RwSignal::new(ALL_SENTINEL.to_string()),
    }
}
