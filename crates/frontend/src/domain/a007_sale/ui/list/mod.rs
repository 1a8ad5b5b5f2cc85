mod state;

use self::state::create_state;
use crate::shared::components::empty_state::EmptyStateMessage;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Select, StatusBadge};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::data::{catalogs, CATALOG_CURRENCY};
use contracts::domain::a007_sale::{Sale, SalesPeriod, SalesSummary};
use contracts::domain::common::time_of_day;
use contracts::shared::filter::empty_state;
use contracts::shared::format::format_amount;
use leptos::prelude::*;

#[component]
fn SaleRow(sale: Sale) -> impl IntoView {
    view! {
        <tr>
            <td class="table__cell--mono">{time_of_day(sale.timestamp)}</td>
            <td class="table__cell--strong">{sale.product_name.clone()}</td>
            <td>{sale.quantity}</td>
            <td class="table__cell--mono">{format_amount(sale.unit_price, sale.currency)}</td>
            <td class="table__cell--mono table__cell--strong">{format_amount(sale.total, sale.currency)}</td>
            <td><StatusBadge presentation=sale.payment_method.presentation() /></td>
            <td>{sale.employee_name.clone()}</td>
            <td class="table__cell--mono">{sale.room_number.clone().unwrap_or_else(|| "-".to_string())}</td>
        </tr>
    }
}

#[component]
pub fn SaleList() -> impl IntoView {
    let state = create_state();
    let sales = &catalogs().sales;

    let kpis = SalesSummary::from_catalog(sales).kpis(CATALOG_CURRENCY);

    let period_options: Vec<(String, String)> = SalesPeriod::all()
        .into_iter()
        .map(|p| (p.code().to_string(), p.display_name().to_string()))
        .collect();

    view! {
        <PageFrame page_id="a007_sale--list" category=PAGE_CAT_LIST>
            <PageHeader title="Restaurant Sales" subtitle="Track restaurant and bar transactions.".to_string()>
                <Select
                    value=Signal::derive(move || state.period.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(period) = SalesPeriod::from_code(&code) {
                            state.period.set(period);
                        }
                    })
                    options=period_options
                />
            </PageHeader>

            <KpiGrid kpis=kpis />

            <div class="card">
                <div class="card__header">
                    <h3>"Recent Transactions"</h3>
                    <p class="card__description">{move || state.period.get().display_name()}</p>
                </div>
                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Time"</th>
                                <th>"Product"</th>
                                <th>"Qty"</th>
                                <th>"Unit Price"</th>
                                <th>"Total"</th>
                                <th>"Payment"</th>
                                <th>"Employee"</th>
                                <th>"Room"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {sales
                                .iter()
                                .cloned()
                                .map(|sale| view! { <SaleRow sale=sale /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>

            {empty_state(sales.len(), true).map(|state| view! { <EmptyStateMessage state=state noun="sales" /> })}
        </PageFrame>
    }
}
