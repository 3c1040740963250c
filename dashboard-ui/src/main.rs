mod app;
mod pages;

pub mod components {
    pub mod alert_banner;
    pub mod alert_list;
    pub mod chart_view;
    pub mod filter_bar;
    pub mod graph_upload;
    pub mod map_view;
    pub mod sidebar;
    pub mod status_cards;
}

use app::App;
use leptos::view;

fn main() {
    leptos::mount_to_body(|| view! { <App/> });
}
