mod state;

use self::state::create_state;
use crate::layout::global_context::use_global_context;
use crate::shared::actions::use_actions;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{options_with_all, Select, StatusBadge};
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::{catalogs, CATALOG_CURRENCY};
use contracts::domain::a004_payment::{Payment, PaymentStatus, PaymentSummary};
use contracts::domain::common::display_date;
use contracts::shared::filter::{empty_state, CatalogFilter};
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
fn PaymentRow(payment: Payment, notice: NoticeSlot) -> impl IntoView {
    let actions = use_actions();
    let payment_id = payment.id.clone();
    let label = format!("Invoice {}", payment.invoice_number);

    view! {
        <tr>
            <td class="table__cell--mono table__cell--strong">{payment.invoice_number.clone()}</td>
            <td class="table__cell--strong">{payment.guest_name.clone()}</td>
            <td class="table__cell--mono">{payment.reservation_id.clone()}</td>
            <td class="table__cell--mono">{format_amount(payment.amount, payment.currency)}</td>
            <td>
                <div class="method-cell">
                    {icon(payment.method.icon())}
                    <span>{payment.method.display_name()}</span>
                </div>
            </td>
            <td>{display_date(payment.date)}</td>
            <td><StatusBadge presentation=payment.status.presentation() /></td>
            <td class="table__cell--right">
                <button
                    class="button button--ghost button--small"
                    on:click=move |_| {
                        actions.run(notice, &label, |a| a.download_invoice(&payment_id));
                    }
                >
                    {icon("download")}
                    "Invoice"
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn PaymentList() -> impl IntoView {
    let global = use_global_context();
    let state = create_state();
    let notice = NoticeSlot::new();
    let payments = &catalogs().payments;

    let visible = Memo::new(move |_| state.filter().apply(payments));
    let empty = move || empty_state(visible.with(Vec::len), state.filter().is_default());
    let kpis = Signal::derive(move || {
        let business_date = global.settings.with(|s| s.regional.business_date);
        PaymentSummary::from_catalog(payments, business_date).kpis(CATALOG_CURRENCY)
    });

    let status_options = options_with_all(
        "All Payments",
        PaymentStatus::all()
            .into_iter()
            .map(|s| (s.code(), s.presentation().label)),
    );

    view! {
        <PageFrame page_id="a004_payment--list" category=PAGE_CAT_LIST>
            <PageHeader title="Payments" subtitle="Track and manage all hotel payments and invoices.".to_string() />
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="filter-bar">
                <SearchInput
                    value=state.search
                    on_change=Callback::new(move |v| state.search.set(v))
                    placeholder="Search by guest name or invoice number..."
                />
                <Select
                    value=state.status
                    on_change=Callback::new(move |v| state.status.set(v))
                    options=status_options
                />
            </div>

            <div class="card">
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Invoice"</th>
                                <th>"Guest"</th>
                                <th>"Reservation"</th>
                                <th>"Amount"</th>
                                <th>"Method"</th>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th class="table__cell--right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || visible.get()
                                key=|p| p.id.clone()
                                children=move |payment| view! { <PaymentRow payment=payment notice=notice /> }
                            />
                        </tbody>
                    </table>
                </div>
            </div>

            {move || empty().map(|state| view! { <EmptyStateMessage state=state noun="payments" /> })}
        </PageFrame>
    }
}
