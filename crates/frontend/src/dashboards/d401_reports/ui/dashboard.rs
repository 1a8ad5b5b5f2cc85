use crate::dashboards::revenue_chart::RevenueChart;
use crate::layout::global_context::use_global_context;
use crate::shared::components::kpi_card::KpiGrid;
use crate::shared::components::notice::{Notice, NoticeBanner, NoticeKind, NoticeSlot};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Select};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_reports::{ReportRange, ReportTab, RevenueReport};
use contracts::dashboards::revenue::RevenuePoint;
use contracts::data::{catalogs, CATALOG_CURRENCY};
use contracts::shared::format::to_fixed;
use leptos::prelude::*;

const EXPORT_FILENAME: &str = "revenue-report.csv";

/// One exported line of the revenue series.
struct RevenueRow(RevenuePoint);

impl CsvExportable for RevenueRow {
    fn headers() -> Vec<&'static str> {
        vec!["Date", "Rooms", "Restaurant", "Total"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let point = &self.0;
        vec![
            point.date.format("%Y-%m-%d").to_string(),
            to_fixed(point.rooms, 2),
            to_fixed(point.restaurant, 2),
            to_fixed(point.total(), 2),
        ]
    }
}

#[component]
fn Placeholder(title: &'static str, icon_name: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__header">
                <h3>{title}</h3>
            </div>
            <div class="card__body report-placeholder">
                {icon(icon_name)}
                <p class="muted">{text}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let global = use_global_context();
    let notice = NoticeSlot::new();
    let series = &catalogs().revenue;

    let tab = RwSignal::new(ReportTab::default());
    let range = RwSignal::new(ReportRange::default());

    let report = Memo::new(move |_| {
        let expenses = global.settings.with(|s| s.reports.operating_expenses);
        RevenueReport::compute(series, expenses)
    });
    let kpis = Signal::derive(move || report.get().kpis(CATALOG_CURRENCY));

    let range_options: Vec<(String, String)> = ReportRange::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.display_name().to_string()))
        .collect();

    let on_export = Callback::new(move |_| {
        let rows: Vec<RevenueRow> = series.iter().copied().map(RevenueRow).collect();
        match export_to_csv(&rows, EXPORT_FILENAME) {
            Ok(()) => {
                log::info!("exported {} revenue rows", rows.len());
                notice.show(Notice {
                    kind: NoticeKind::Success,
                    text: format!("Exported {EXPORT_FILENAME}"),
                });
            }
            Err(err) => {
                log::error!("revenue export failed: {err}");
                notice.show(Notice {
                    kind: NoticeKind::Error,
                    text: format!("Export failed: {err}"),
                });
            }
        }
    });

    view! {
        <PageFrame page_id="d401_reports--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Reports & Analytics" subtitle="View detailed reports and business insights.".to_string()>
                <Select
                    value=Signal::derive(move || range.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(selected) = ReportRange::from_code(&code) {
                            range.set(selected);
                        }
                    })
                    options=range_options
                />
                <Button variant="secondary" on_click=on_export>
                    {icon("download")}
                    "Export"
                </Button>
            </PageHeader>
            <NoticeBanner notice=notice />

            <KpiGrid kpis=kpis />

            <div class="tabs">
                {ReportTab::all()
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class="tabs__item"
                            class:tabs__item--active=move || tab.get() == t
                            data-testid=format!("tab-{}", t.code())
                            on:click=move |_| tab.set(t)
                        >
                            {t.display_name()}
                        </button>
                    })
                    .collect_view()}
            </div>

            {move || match tab.get() {
                ReportTab::Revenue => view! {
                    <RevenueChart series=series.clone() currency=CATALOG_CURRENCY />
                }
                .into_any(),
                ReportTab::Occupancy => view! {
                    <Placeholder
                        title="Occupancy Rate Trends"
                        icon_name="trending-up"
                        text="Occupancy rate chart would be displayed here"
                    />
                }
                .into_any(),
                ReportTab::Restaurant => view! {
                    <Placeholder
                        title="Restaurant Performance"
                        icon_name="bar-chart"
                        text="Restaurant sales and inventory reports would be displayed here"
                    />
                }
                .into_any(),
                ReportTab::Financial => view! {
                    <div class="card">
                        <div class="card__header">
                            <h3>"Financial Summary"</h3>
                        </div>
                        <div class="card__body financial-summary">
                            {report
                                .get()
                                .financial_rows(CATALOG_CURRENCY)
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div class="financial-summary__row">
                                        <span class="muted">{label}</span>
                                        <span class="financial-summary__value">{value}</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn test_revenue_rows_to_csv() {
        let last = catalogs().revenue.last().copied().unwrap();
        let rows = vec![RevenueRow(RevenuePoint {
            rooms: 12400.0,
            restaurant: 5100.0,
            ..last
        })];
        let csv = build_csv(&rows);
        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(lines.next(), Some("Date;Rooms;Restaurant;Total"));
        let line = lines.next().unwrap_or_default();
        assert_eq!(line, format!("{};12400.00;5100.00;17500.00", last.date.format("%Y-%m-%d")));
    }
}
