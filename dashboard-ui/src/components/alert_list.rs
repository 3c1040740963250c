use dashboard_core::alerts::{format_timestamp, visible_alerts};
use dashboard_core::selection::Selection;
use hazard_catalog::AlertRecord;
use leptos::*;

#[component]
pub fn AlertList(
    alerts: Vec<AlertRecord>,
    #[prop(into)] selection: Signal<Selection>,
) -> impl IntoView {
    let alerts = store_value(alerts);
    let visible = create_memo(move |_| {
        alerts.with_value(|alerts| visible_alerts(alerts, &selection.get()))
    });

    view! {
        <section class="panel">
            <div class="panel-head">
                <h3>"Recent Alerts"</h3>
                <span class="meta">{move || format!("{} alerts", visible.get().len())}</span>
            </div>
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p>"No alerts for the selected disaster types"</p>
                        </div>
                    }
                }
            >
                <ul class="alert-list">
                    <For
                        each=move || visible.get()
                        key=|alert| alert.id.clone()
                        children=move |alert| {
                            view! {
                                <li>
                                    <div class="alert-head">
                                        <span class=format!(
                                            "badge level-{}",
                                            alert.level.as_str(),
                                        )>{alert.level.display()}</span>
                                        <h4>{alert.title.clone()}</h4>
                                        <span class="meta alert-time">
                                            {format_timestamp(&alert.timestamp)}
                                        </span>
                                    </div>
                                    <p class="meta">{alert.location.clone()}</p>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
