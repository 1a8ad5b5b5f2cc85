mod state;

use self::state::create_state;
use crate::domain::a002_reservation::ui::table::ReservationTable;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{options_with_all, Select};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::catalogs;
use contracts::domain::a002_reservation::{ReservationStatus, ReservationSummary};
use contracts::shared::filter::{empty_state, CatalogFilter};
use leptos::prelude::*;

#[component]
pub fn ReservationList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let reservations = &catalogs().reservations;

    let visible = Memo::new(move |_| state.filter().apply(reservations));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());
    let kpis = ReservationSummary::from_catalog(reservations).kpis();

    let status_options = options_with_all(
        "All Reservations",
        ReservationStatus::all()
            .into_iter()
            .map(|s| (s.code(), s.presentation().label)),
    );

    view! {
        <PageFrame page_id="a002_reservation--list" category=PAGE_CAT_LIST>
            <PageHeader title="Reservations" subtitle="Manage all hotel reservations and bookings.".to_string() />
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search by guest name or room number..."
                />
                <Select
                    value=state.status
                    on_change=Callback::new(move |v| state.status.set(v))
                    options=status_options
                />
            </div>

            <div class="card">
                <ReservationTable reservations=visible notice=notice />
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="reservations" /> })}
        </PageFrame>
    }
}
