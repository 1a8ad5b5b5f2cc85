mod state;

use self::state::create_state;
use crate::shared::actions::use_actions;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::catalogs;
use contracts::domain::a003_client::{Client, ClientSummary};
use contracts::domain::common::display_date;
use contracts::shared::filter::{empty_state, CatalogFilter};
use contracts::system::actions::{EntityKind, RecordRef};
use leptos::prelude::*;

#[component]
fn ClientRow(client: Client, #[prop(into)] query: Signal<String>, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let target = RecordRef::new(EntityKind::Client, client.id.as_str());
    let label = format!("View {}", client.name);

    let name = client.name.clone();
    let email = client.email.clone();
    let phone = client.phone.clone();

    view! {
        <tr>
            <td>
                <div class="client-cell">
                    <div class="avatar">{client.initials()}</div>
                    <span class="table__cell--strong">
                        {move || highlight_matches(&name, &query.get())}
                    </span>
                </div>
            </td>
            <td>
                <div class="contact-cell">
                    <div>{icon("mail")}{move || highlight_matches(&email, &query.get())}</div>
                    <div class="table__cell--mono">{icon("phone")}{move || highlight_matches(&phone, &query.get())}</div>
                </div>
            </td>
            <td class="table__cell--mono">{client.total_reservations}</td>
            <td>{display_date(client.last_visit)}</td>
            <td class="table__cell--right">
                <button
                    class="button button--ghost button--small"
                    on:click=move |_| {
                        actions.run(notice, &label, |a| a.view(target.clone()));
                    }
                >
                    {icon("eye")}
                    "View"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn ClientList() -> impl IntoView {
    let state = create_state();
    let notice = NoticeSlot::new();
    let clients = &catalogs().clients;

    let visible = Memo::new(move |_| state.filter().apply(clients));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());
    let kpis = ClientSummary::from_catalog(clients).kpis();

    view! {
        <PageFrame page_id="a003_client--list" category=PAGE_CAT_LIST>
            <PageHeader title="Clients" subtitle="Manage your hotel guests and customer database.".to_string() />
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search by name, email, or phone..."
                />
            </div>

            <div class="card">
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Client"</th>
                                <th>"Contact"</th>
                                <th>"Reservations"</th>
                                <th>"Last Visit"</th>
                                <th class="table__cell--right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|c| c.id.clone()
                                children=move |client| view! {
                                    <ClientRow client=client query=state.search notice=notice />
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="clients" /> })}
        </PageFrame>
    }
}
