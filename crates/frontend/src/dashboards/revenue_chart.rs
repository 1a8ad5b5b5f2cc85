use contracts::dashboards::revenue::{peak_total, RevenuePoint};
use contracts::domain::common::{short_date, Currency};
use contracts::shared::format::format_amount;
use leptos::prelude::*;

/// Bar height as a percentage of the tallest day; 0 when the series has no revenue.
pub fn bar_height(value: f64, peak: Option<f64>) -> f64 {
    match peak {
        Some(peak) if peak > 0.0 => (value / peak * 100.0).clamp(0.0, 100.0),
        _ => 0.0,
    }
}

/// Daily rooms/restaurant revenue as grouped CSS bars.
#[component]
pub fn RevenueChart(
    #[prop(into)] series: Signal<Vec<RevenuePoint>>,
    #[prop(into)] currency: Signal<Currency>,
) -> impl IntoView {
    let peak = Memo::new(move |_| series.with(|s| peak_total(s)));

    view! {
        <div class="card revenue-chart" data-testid="card-revenue-chart">
            <div class="card__header">
                <h3>"Revenue Breakdown"</h3>
            </div>
            <div class="card__body">
                <div class="revenue-chart__plot">
                    {move || {
                        let currency = currency.get();
                        series
                            .get()
                            .into_iter()
                            .map(|point| {
                                let rooms_style = format!("height: {:.1}%", bar_height(point.rooms, peak.get()));
                                let restaurant_style = format!(
                                    "height: {:.1}%",
                                    bar_height(point.restaurant, peak.get()),
                                );
                                view! {
                                    <div class="revenue-chart__day">
                                        <div class="revenue-chart__bars">
                                            <div
                                                class="revenue-chart__bar revenue-chart__bar--rooms"
                                                style=rooms_style
                                                title=format_amount(point.rooms, currency)
                                            ></div>
                                            <div
                                                class="revenue-chart__bar revenue-chart__bar--restaurant"
                                                style=restaurant_style
                                                title=format_amount(point.restaurant, currency)
                                            ></div>
                                        </div>
                                        <span class="revenue-chart__label">{short_date(point.date)}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <div class="revenue-chart__legend">
                    <span class="revenue-chart__key revenue-chart__key--rooms">
                        {move || format!("Rooms ({})", currency.get().code())}
                    </span>
                    <span class="revenue-chart__key revenue-chart__key--restaurant">
                        {move || format!("Restaurant ({})", currency.get().code())}
                    </span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height() {
        assert_eq!(bar_height(50.0, Some(200.0)), 25.0);
        assert_eq!(bar_height(200.0, Some(200.0)), 100.0);
        assert_eq!(bar_height(10.0, None), 0.0);
        assert_eq!(bar_height(10.0, Some(0.0)), 0.0);
    }
}
