use dashboard_core::banner::BannerState;
use hazard_catalog::RiskLevel;
use leptos::*;

/// Transient banner, independent of the filter selection. Dismissal is
/// one-way; only a false→true transition of `is_active` re-shows it.
#[component]
pub fn AlertBanner(
    message: String,
    level: RiskLevel,
    #[prop(into, default = MaybeSignal::Static(true))] is_active: MaybeSignal<bool>,
) -> impl IntoView {
    let state = create_rw_signal(BannerState::new(is_active.get_untracked()));
    create_effect(move |_| {
        let active = is_active.get();
        state.update(|banner| banner.sync(active));
    });

    view! {
        <Show when=move || state.get().is_visible() fallback=|| ()>
            <div class=format!("alert-banner level-{}", level.as_str())>
                <span class="banner-icon">"⚠"</span>
                <p>{message.clone()}</p>
                <button
                    class="banner-dismiss"
                    on:click=move |_| state.update(|banner| banner.dismiss())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
