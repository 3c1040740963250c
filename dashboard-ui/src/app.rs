use crate::components::sidebar::Sidebar;
use crate::pages::{
    AlertsPage, AnalyticsPage, DashboardPage, MapPage, Page, ResourcesPage, SettingsPage,
    UploadPage,
};
use dashboard_core::datasets;
use leptos::*;

/// Application shell: sidebar navigation plus the active page. Page
/// switching is plain client-side state; the built-in datasets load once
/// and each page hands them to its views as read-only input.
#[component]
pub fn App() -> impl IntoView {
    let page = create_rw_signal(Page::Dashboard);

    let data = match datasets::load_builtin() {
        Ok(data) => data,
        Err(err) => {
            return view! {
                <div class="layout">
                    <pre class="error">{format!("failed to load built-in datasets: {err}")}</pre>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div class="layout">
            <Sidebar page=page/>
            <main class="content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardPage data=data.clone()/> }.into_view(),
                    Page::Map => view! { <MapPage data=data.clone()/> }.into_view(),
                    Page::Alerts => view! { <AlertsPage data=data.clone()/> }.into_view(),
                    Page::Analytics => view! { <AnalyticsPage data=data.clone()/> }.into_view(),
                    Page::Upload => view! { <UploadPage/> }.into_view(),
                    Page::Resources => view! { <ResourcesPage/> }.into_view(),
                    Page::Settings => view! { <SettingsPage/> }.into_view(),
                }}
            </main>
        </div>
    }
    .into_view()
}
