use contracts::domain::a003_client::ClientFilter;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ClientListState {
    pub search: RwSignal<String>,
}

impl ClientListState {
    pub fn filter(&self) -> ClientFilter {
        ClientFilter::default().with_query(&self.search.get())
    }
}

pub fn create_state() -> ClientListState {
    ClientListState {
        search: RwSignal::new(String::new()),
    }
}
