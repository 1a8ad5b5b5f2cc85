use crate::dashboards::revenue_chart::RevenueChart;
use crate::domain::a002_reservation::ui::table::ReservationTable;
use crate::layout::global_context::use_global_context;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{NoticeBanner, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_overview::{todays_reservations, OverviewSummary};
use contracts::data::{catalogs, CATALOG_CURRENCY};
use leptos::prelude::*;

const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("/reservations", "calendar", "Quick Check-in"),
    ("/rooms", "bed", "View Available Rooms"),
    ("/restaurant/sales", "dollar-sign", "Add Restaurant Sale"),
    ("/reports", "bar-chart", "Generate Daily Report"),
];

/// Owner landing page
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let global = use_global_context();
    let notice = NoticeSlot::new();
    let data = catalogs();

    let kpis = Signal::derive(move || {
        let business_date = global.settings.with(|s| s.regional.business_date);
        OverviewSummary::compute(&data.rooms, &data.reservations, &data.revenue, business_date)
            .kpis(CATALOG_CURRENCY)
    });
    let todays = todays_reservations(&data.reservations).to_vec();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Dashboard" subtitle="Welcome back! Here's your hotel overview.".to_string() />
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="dashboard-grid">
                <div class="dashboard-grid__wide">
                    <RevenueChart series=data.revenue.clone() currency=CATALOG_CURRENCY />
                </div>
                <div class="card">
                    <div class="card__header">
                        <h3>"Quick Actions"</h3>
                    </div>
                    <div class="card__body quick-actions">
                        {QUICK_ACTIONS
                            .into_iter()
                            .map(|(href, icon_name, label)| view! {
                                <a class="button button--secondary quick-actions__item" href=href>
                                    {icon(icon_name)}
                                    {label}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3>"Today's Reservations"</h3>
                </div>
                <ReservationTable reservations=todays notice=notice />
            </div>
        </PageFrame>
    }
}
