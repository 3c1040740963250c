use dashboard_core::selection::Selection;
use hazard_catalog::catalog;
use leptos::*;

/// One toggleable chip per catalog entry. The pressed state is exactly the
/// selection membership test; interaction never mutates the selection
/// directly, it hands the toggled value upward through `on_change`.
#[component]
pub fn FilterBar(
    #[prop(into)] selection: Signal<Selection>,
    #[prop(into)] on_change: Callback<Selection>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {catalog()
                .into_iter()
                .map(|entry| {
                    let id = entry.id;
                    let pressed = move || selection.get().contains(id);
                    view! {
                        <button
                            class="chip"
                            class:chip-active=pressed
                            style=move || {
                                if pressed() {
                                    format!("color: {c}; border-color: {c};", c = entry.color)
                                } else {
                                    String::new()
                                }
                            }
                            on:click=move |_| {
                                on_change.call(selection.get_untracked().toggle(id))
                            }
                        >
                            <Show when=pressed fallback=|| ()>
                                <span class="chip-check">"✓"</span>
                            </Show>
                            {entry.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
