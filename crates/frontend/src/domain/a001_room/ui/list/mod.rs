mod state;

use self::state::create_state;
use crate::domain::a001_room::ui::card::RoomCard;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{options_with_all, Select};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::catalogs;
use contracts::domain::a001_room::RoomStatus;
use contracts::shared::filter::{empty_state, CatalogFilter};
use leptos::prelude::*;

#[component]
pub fn RoomList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let rooms = &catalogs().rooms;

    let visible = Memo::new(move |_| state.filter().apply(rooms));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());

    let status_options = options_with_all(
        "All Rooms",
        RoomStatus::all()
            .into_iter()
            .map(|s| (s.code(), s.presentation().label)),
    );

    view! {
        <PageFrame page_id="a001_room--list" category=PAGE_CAT_LIST>
            <PageHeader title="Room Management" subtitle="Manage your hotel rooms and availability.".to_string() />
            <NoticeBanner notice=notice />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search rooms..."
                />
                <Select
                    value=state.status
                    on_change=Callback::new(move |v| state.status.set(v))
                    options=status_options
                />
            </div>

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|room| room.number.clone()
                    children=move |room| view! { <RoomCard room=room notice=notice /> }
                />
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="rooms" /> })}
        </PageFrame>
    }
}
