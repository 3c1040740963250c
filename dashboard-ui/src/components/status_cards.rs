use dashboard_core::selection::Selection;
use dashboard_core::status::{month_over_month, summarize, TrendDelta};
use hazard_catalog::{AlertRecord, RiskLocation, TrendRow};
use leptos::*;

/// Headline cards derived from the filtered datasets. The counts go to
/// zero rather than disappearing when the selection matches nothing.
#[component]
pub fn StatusCards(
    locations: Vec<RiskLocation>,
    alerts: Vec<AlertRecord>,
    trends: Vec<TrendRow>,
    #[prop(into)] selection: Signal<Selection>,
) -> impl IntoView {
    let locations = store_value(locations);
    let alerts = store_value(alerts);
    let trends = store_value(trends);

    let summary = create_memo(move |_| {
        locations.with_value(|locations| {
            alerts.with_value(|alerts| summarize(locations, alerts, &selection.get()))
        })
    });
    let delta = create_memo(move |_| {
        trends.with_value(|trends| month_over_month(trends, &selection.get()))
    });

    let trend_tag = move |delta: Option<TrendDelta>| {
        delta.map(|delta| {
            let arrow = if delta.rising { "↑" } else { "↓" };
            view! {
                <span class="trend" class:trend-up=delta.rising class:trend-down=!delta.rising>
                    {format!("{arrow} {:.1}%", delta.pct)}
                </span>
            }
        })
    };

    view! {
        <div class="card-grid">
            <div class="status-card">
                <p class="card-title">"Active Alerts"</p>
                <div class="card-value-row">
                    <p class="card-value">{move || summary.get().active_alerts}</p>
                    {move || trend_tag(delta.get())}
                </div>
                <p class="meta">"Alerts matching the current filter"</p>
            </div>
            <div class="status-card">
                <p class="card-title">"Severe Alerts"</p>
                <p class="card-value">{move || summary.get().severe_alerts}</p>
                <p class="meta">"Highest alert level in the feed"</p>
            </div>
            <div class="status-card">
                <p class="card-title">"High Risk Zones"</p>
                <p class="card-value">{move || summary.get().high_risk_zones}</p>
                <p class="meta">"Locations rated high or severe"</p>
            </div>
            <div class="status-card">
                <p class="card-title">"Monitored Areas"</p>
                <p class="card-value">{move || summary.get().monitored_areas}</p>
                <p class="meta">"Active monitoring across states and UTs"</p>
            </div>
        </div>
    }
}
