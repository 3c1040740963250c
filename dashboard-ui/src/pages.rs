use crate::components::alert_banner::AlertBanner;
use crate::components::alert_list::AlertList;
use crate::components::chart_view::ChartView;
use crate::components::filter_bar::FilterBar;
use crate::components::graph_upload::GraphUpload;
use crate::components::map_view::MapView;
use crate::components::status_cards::StatusCards;
use dashboard_core::datasets::Datasets;
use dashboard_core::selection::Selection;
use hazard_catalog::RiskLevel;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Map,
    Alerts,
    Analytics,
    Upload,
    Resources,
    Settings,
}

impl Page {
    pub fn all() -> [Page; 7] {
        [
            Page::Dashboard,
            Page::Map,
            Page::Alerts,
            Page::Analytics,
            Page::Upload,
            Page::Resources,
            Page::Settings,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Map => "Map",
            Page::Alerts => "Alerts",
            Page::Analytics => "Analytics",
            Page::Upload => "Upload",
            Page::Resources => "Resources",
            Page::Settings => "Settings",
        }
    }
}

/// Each page that hosts derived views owns one selection signal. The views
/// receive it read-only; mutation happens only through the filter bar's
/// change callback landing back here.
fn page_selection() -> (RwSignal<Selection>, Callback<Selection>) {
    let selection = create_rw_signal(Selection::new());
    let on_change = Callback::new(move |next: Selection| selection.set(next));
    (selection, on_change)
}

#[component]
pub fn DashboardPage(data: Datasets) -> impl IntoView {
    let (selection, on_change) = page_selection();

    view! {
        <AlertBanner
            message="Severe flood risk detected in Assam region".to_string()
            level=RiskLevel::High
        />
        <div class="page-head">
            <h1>"Disaster Prediction Dashboard"</h1>
            <p class="meta">"Monitor disaster risks and alerts across India"</p>
        </div>
        <FilterBar selection=selection on_change=on_change/>
        <StatusCards
            locations=data.locations.clone()
            alerts=data.alerts.clone()
            trends=data.trends.clone()
            selection=selection
        />
        <div class="grid-two">
            <MapView locations=data.locations.clone() selection=selection/>
            <AlertList alerts=data.alerts.clone() selection=selection/>
        </div>
        <ChartView
            rows=data.trends
            selection=selection
            title="Historical Disaster Trends (12 Months)".to_string()
        />
    }
}

#[component]
pub fn MapPage(data: Datasets) -> impl IntoView {
    let (selection, on_change) = page_selection();

    view! {
        <div class="page-head">
            <h1>"Disaster Risk Map"</h1>
            <p class="meta">"View disaster risk zones across India and current alerts"</p>
        </div>
        <FilterBar selection=selection on_change=on_change/>
        <MapView locations=data.locations selection=selection/>
    }
}

#[component]
pub fn AlertsPage(data: Datasets) -> impl IntoView {
    let (selection, on_change) = page_selection();

    view! {
        <div class="page-head">
            <h1>"Alert Center"</h1>
            <p class="meta">"View and manage all active disaster alerts"</p>
        </div>
        <FilterBar selection=selection on_change=on_change/>
        <AlertList alerts=data.alerts selection=selection/>
    }
}

#[component]
pub fn AnalyticsPage(data: Datasets) -> impl IntoView {
    let (selection, on_change) = page_selection();

    view! {
        <div class="page-head">
            <h1>"Analytics"</h1>
            <p class="meta">"View historical trends and prediction analytics"</p>
        </div>
        <FilterBar selection=selection on_change=on_change/>
        <ChartView
            rows=data.trends
            selection=selection
            title="Historical Disaster Trends (12 Months)".to_string()
        />
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="page-head">
            <h1>"Upload Disaster Graph"</h1>
            <p class="meta">"Share your own disaster data analysis and visualizations"</p>
        </div>
        <div class="grid-two">
            <GraphUpload/>
            <div class="stack">
                <section class="panel">
                    <h3>"Graph Upload Guidelines"</h3>
                    <ul class="bullet-list">
                        <li>"Ensure your graph accurately represents disaster data related to India"</li>
                        <li>"Include clear labels for all axes and data points"</li>
                        <li>"Cite your data sources in the description for verification"</li>
                        <li>"Focus on one disaster type per graph for clarity"</li>
                        <li>"Images must be less than 10MB in size"</li>
                    </ul>
                </section>
                <section class="panel">
                    <h3>"What Happens Next?"</h3>
                    <p class="meta">
                        "After submission, your graph is reviewed by the data team. Approved
                        graphs appear in the community visualizations section of the
                        analytics dashboard."
                    </p>
                </section>
            </div>
        </div>
    }
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <div class="page-head">
            <h1>"Resources"</h1>
            <p class="meta">"Preparedness guides and emergency contacts"</p>
        </div>
        <div class="grid-two">
            <section class="panel">
                <h3>"Preparedness Guides"</h3>
                <ul class="bullet-list">
                    <li>"Flood safety: evacuation routes and water-safety checklists"</li>
                    <li>"Cyclone readiness: securing property and storm shelters"</li>
                    <li>"Earthquake drills: drop, cover and hold on"</li>
                    <li>"Heatwave advisories: hydration and cooling centers"</li>
                </ul>
            </section>
            <section class="panel">
                <h3>"Emergency Contacts"</h3>
                <ul class="bullet-list">
                    <li>"National Disaster Response Force: 011-24363260"</li>
                    <li>"National Emergency Number: 112"</li>
                    <li>"State Disaster Management Authorities: see state portals"</li>
                </ul>
            </section>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let notifications = create_rw_signal(true);
    let email_alerts = create_rw_signal(false);
    let sms_alerts = create_rw_signal(false);
    let auto_refresh = create_rw_signal(true);
    let dark_mode = create_rw_signal(false);

    let toggle = |label: &'static str, hint: &'static str, value: RwSignal<bool>| {
        view! {
            <div class="setting-row">
                <div>
                    <p class="setting-label">{label}</p>
                    <p class="meta">{hint}</p>
                </div>
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| value.set(event_target_checked(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="page-head">
            <h1>"Settings"</h1>
            <p class="meta">"Manage your application preferences and notifications"</p>
        </div>
        <section class="panel">
            <h3>"Notification Settings"</h3>
            {toggle(
                "In-app Notifications",
                "Receive alerts within the application",
                notifications,
            )}
            {toggle("Email Alerts", "Receive disaster alerts via email", email_alerts)}
            {toggle("SMS Alerts", "Receive disaster alerts via SMS", sms_alerts)}
        </section>
        <section class="panel">
            <h3>"Display"</h3>
            {toggle("Auto Refresh", "Reload dashboard data periodically", auto_refresh)}
            {toggle("Dark Mode", "Use the dark color scheme", dark_mode)}
        </section>
    }
}
