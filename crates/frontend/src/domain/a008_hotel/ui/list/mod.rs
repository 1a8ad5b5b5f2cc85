mod state;

use self::state::create_state;
use crate::domain::a008_hotel::ui::card::HotelCard;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::{catalogs, CATALOG_CURRENCY};
use contracts::domain::a008_hotel::PlatformSummary;
use contracts::shared::filter::{empty_state, CatalogFilter};
use leptos::prelude::*;

#[component]
pub fn HotelList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let hotels = &catalogs().hotels;

    let visible = Memo::new(move |_| state.filter().apply(hotels));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());
    let kpis = PlatformSummary::from_catalog(hotels).kpis(CATALOG_CURRENCY);

    view! {
        <PageFrame page_id="a008_hotel--list" category=PAGE_CAT_LIST>
            <PageHeader title="Super Admin" subtitle="Manage every hotel on the platform.".to_string() />
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search hotels..."
                />
            </div>

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|hotel| hotel.name.clone()
                    children=move |hotel| view! { <HotelCard hotel=hotel notice=notice /> }
                />
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="hotels" /> })}
        </PageFrame>
    }
}
