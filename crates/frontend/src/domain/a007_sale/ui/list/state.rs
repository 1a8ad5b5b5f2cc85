use contracts::domain::a007_sale::SalesPeriod;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SaleListState {
    pub period: RwSignal<SalesPeriod>,
}

pub fn create_state() -> SaleListState {
    SaleListState {
        period: RwSignal::new(SalesPeriod::default()),
    }
}
