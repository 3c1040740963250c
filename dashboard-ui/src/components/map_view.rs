use dashboard_core::map::map_pins;
use dashboard_core::selection::Selection;
use hazard_catalog::{label_for, RiskLocation};
use leptos::*;

/// Placeholder map renderer: a canvas div with pins at illustrative percent
/// coordinates. The projection and filtering live in dashboard-core, so a
/// real mapping backend can replace this component without touching them.
#[component]
pub fn MapView(
    locations: Vec<RiskLocation>,
    #[prop(into)] selection: Signal<Selection>,
) -> impl IntoView {
    let locations = store_value(locations);
    let pins = create_memo(move |_| {
        locations.with_value(|locations| map_pins(locations, &selection.get()))
    });
    let focused = create_rw_signal(None::<String>);

    view! {
        <section class="panel map-panel">
            <div class="panel-head">
                <h3>"Risk Map"</h3>
                <span class="meta">
                    {move || format!("Showing {} disaster risk locations", pins.get().len())}
                </span>
            </div>
            <div class="map-canvas">
                <Show
                    when=move || !pins.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p>"No locations match the current filter."</p>
                            </div>
                        }
                    }
                >
                    <For
                        each=move || pins.get()
                        key=|pin| pin.location.id.clone()
                        children=move |pin| {
                            let id = pin.location.id.clone();
                            view! {
                                <button
                                    class="map-pin"
                                    style=format!(
                                        "left: {:.2}%; top: {:.2}%; background: {};",
                                        pin.x_pct,
                                        pin.y_pct,
                                        pin.color,
                                    )
                                    title=pin.location.name.clone()
                                    on:click=move |_| focused.set(Some(id.clone()))
                                ></button>
                            }
                        }
                    />
                    {move || {
                        let pins = pins.get();
                        focused
                            .get()
                            .and_then(|id| {
                                pins.iter().find(|pin| pin.location.id == id).cloned()
                            })
                            .map(|pin| {
                                view! {
                                    <div
                                        class="map-popup"
                                        style=format!(
                                            "left: {:.2}%; top: {:.2}%;",
                                            pin.x_pct,
                                            pin.y_pct,
                                        )
                                    >
                                        <div class="panel-head">
                                            <h4>{pin.location.name.clone()}</h4>
                                            <button
                                                class="popup-close"
                                                on:click=move |_| focused.set(None)
                                            >
                                                "×"
                                            </button>
                                        </div>
                                        <p class="meta">
                                            {format!("{} Risk", label_for(&pin.location.category))}
                                        </p>
                                        <span class=format!(
                                            "badge level-{}",
                                            pin.location.risk.as_str(),
                                        )>{format!("{} Risk", pin.location.risk.display())}</span>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </div>
        </section>
    }
}
