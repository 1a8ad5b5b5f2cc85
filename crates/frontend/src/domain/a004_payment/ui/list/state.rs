use contracts::domain::a004_payment::PaymentFilter;
use contracts::shared::filter::ALL_SENTINEL;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct PaymentListState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
}

impl PaymentListState {
    pub fn filter(&self) -> PaymentFilter {
        PaymentFilter::default()
            .with_query(&self.search.get())
            .with_status(&self.status.get())
    }
}

pub fn create_state() -> PaymentListState {
    PaymentListState {
        search: RwSignal::new(String::new()),
        status: RwSignal::new(ALL_SENTINEL.to_string()),
    }
}
