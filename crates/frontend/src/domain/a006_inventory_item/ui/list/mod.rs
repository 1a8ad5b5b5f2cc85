mod state;

use self::state::create_state;
use crate::domain::a006_inventory_item::ui::card::InventoryCard;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{options_with_all, Select};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::catalogs;
use contracts::domain::a006_inventory_item::{low_stock_count, low_stock_message, INVENTORY_CATEGORIES};
use contracts::shared::filter::{empty_state, CatalogFilter};
use leptos::prelude::*;

#[component]
pub fn InventoryList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let inventory = &catalogs().inventory;

    let visible = Memo::new(move |_| state.filter().apply(inventory));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());

    let category_options = options_with_all(
        "All Categories",
        INVENTORY_CATEGORIES.iter().map(|c| (*c, *c)),
    );

    let banner = low_stock_message(low_stock_count(inventory)).map(|message| {
        view! {
            <div class="alert-banner">
                <div class="alert-banner__text">
                    {icon("alert-triangle")}
                    <div>
                        <div class="alert-banner__title">"Low Stock Alert"</div>
                        <div class="muted">{message}</div>
                    </div>
                </div>
                <button
                    class=move || if state.low_stock_only.get() {
                        "button button--primary button--small"
                    } else {
                        "button button--secondary button--small"
                    }
                    on:click=move |_| state.low_stock_only.update(|v| *v = !*v)
                >
                    {move || if state.low_stock_only.get() { "Show All" } else { "Show Low Stock" }}
                </button>
            </div>
        }
    });

    view! {
        <PageFrame page_id="a006_inventory_item--list" category=PAGE_CAT_LIST>
            <PageHeader title="Restaurant Inventory" subtitle="Manage your restaurant stock and supplies.".to_string() />
            <NoticeBanner notice=notice />

            {banner}

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search products..."
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
                    key=|item| item.product_name.clone()
                    children=move |item| view! { <InventoryCard item=item notice=notice /> }
                />
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="products" /> })}
        </PageFrame>
    }
}
