mod state;

use self::state::create_state;
use crate::domain::a005_menu_item::ui::card::MenuItemCard;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{options_with_all, Select};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::catalogs;
use contracts::domain::a005_menu_item::distinct_categories;
use contracts::shared::filter::{empty_state, CatalogFilter};
use leptos::prelude::*;

#[component]
pub fn MenuItemList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let items = &catalogs().menu_items;

    let visible = Memo::new(move |_| state.filter().apply(items));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());

    let categories = distinct_categories(items);
    let category_options = options_with_all(
        "All Categories",
        categories.iter().map(|c| (c.as_str(), c.as_str())),
    );

    view! {
        <PageFrame page_id="a005_menu_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Restaurant Menu" subtitle="Manage your restaurant menu items and pricing.".to_string() />
            <NoticeBanner notice=notice />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search menu items..."
                />
                <Select
                    value=state.category
                    on_change=Callback::new(move |v| state.category.set(v))
                    options=category_options
                />
            </div>

            <div class="card-grid">
                <For
                    each=move || visible.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <MenuItemCard item=item notice=notice /> }
                />
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="menu items" /> })}
        </PageFrame>
    }
}
