use dashboard_core::chart::{chart_series, has_data, max_value, months};
use dashboard_core::selection::Selection;
use hazard_catalog::TrendRow;
use leptos::*;

/// Grouped bar chart over the monthly trend rows. One bar series per
/// visible category; bar heights scale against the tallest visible bar.
#[component]
pub fn ChartView(
    rows: Vec<TrendRow>,
    #[prop(into)] selection: Signal<Selection>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let month_labels = months(&rows);
    let rows = store_value(rows);
    let series = create_memo(move |_| {
        rows.with_value(|rows| chart_series(rows, &selection.get()))
    });

    view! {
        <section class="panel chart-panel">
            {title.map(|title| view! { <h3>{title}</h3> })}
            <Show
                when=move || has_data(&series.get())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"No recorded events for the selected disaster types."</p>
                        </div>
                    }
                }
            >
                <div class="chart-columns">
                    {
                        let month_labels = month_labels.clone();
                        move || {
                            let series = series.get();
                            let peak = max_value(&series).max(1) as f64;
                            month_labels
                                .iter()
                                .enumerate()
                                .map(|(index, month)| {
                                    view! {
                                        <div class="chart-column">
                                            <div class="chart-bars">
                                                {series
                                                    .iter()
                                                    .map(|s| {
                                                        let value = s
                                                            .values
                                                            .get(index)
                                                            .copied()
                                                            .unwrap_or(0);
                                                        let height = f64::from(value) / peak * 100.0;
                                                        view! {
                                                            <div
                                                                class="chart-bar"
                                                                style=format!(
                                                                    "height: {height:.1}%; background: {};",
                                                                    s.color,
                                                                )
                                                                title=format!("{}: {value}", s.label)
                                                            ></div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <span class="chart-month">{month.clone()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }
                    }
                </div>
                <div class="chart-legend">
                    {move || {
                        series
                            .get()
                            .iter()
                            .map(|s| {
                                view! {
                                    <span class="legend-item">
                                        <span
                                            class="legend-dot"
                                            style=format!("background: {};", s.color)
                                        ></span>
                                        {s.label.clone()}
                                    </span>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
