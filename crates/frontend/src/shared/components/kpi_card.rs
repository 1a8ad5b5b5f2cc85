use crate::shared::icons::icon;
use contracts::shared::indicators::{Kpi, Trend};
use leptos::prelude::*;

/// "+12%" / "-5%"
pub fn trend_label(trend: Trend) -> String {
    let sign = if trend.is_positive { '+' } else { '-' };
    format!("{}{}%", sign, trend.percent.abs())
}

#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let change_view = kpi.trend.map(|trend| {
        let cls = if trend.is_positive {
            "stat-card__change stat-card__change--up"
        } else {
            "stat-card__change stat-card__change--down"
        };
        let arrow = if trend.is_positive { icon("trending-up") } else { icon("trending-down") };
        view! { <span class=cls>{arrow}{trend_label(trend)}</span> }
    });

    let subtitle_view = kpi
        .subtitle
        .clone()
        .map(|s| view! { <span class="stat-card__subtitle">{s}</span> });

    view! {
        <div class="stat-card" data-kpi=kpi.slug()>
            <div class="stat-card__header">
                <div class="stat-card__label">{kpi.title.clone()}</div>
                <div class="stat-card__icon">{icon(&kpi.icon)}</div>
            </div>
            <div class="stat-card__value">{kpi.value.clone()}</div>
            <div class="stat-card__footer">
                {change_view}
                {subtitle_view}
            </div>
        </div>
    }
}

/// Row of KPI cards.
#[component]
pub fn KpiGrid(#[prop(into)] kpis: Signal<Vec<Kpi>>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            {move || kpis.get().into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_label() {
        assert_eq!(trend_label(Trend::up(12.0)), "+12%");
        assert_eq!(trend_label(Trend::down(4.5)), "-4.5%");
    }
}
