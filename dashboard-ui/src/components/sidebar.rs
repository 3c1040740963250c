use crate::pages::Page;
use leptos::*;

#[component]
pub fn Sidebar(page: RwSignal<Page>) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-mark">"⚠"</span>
                <h1>"Disaster Warden"</h1>
            </div>
            <nav>
                <ul>
                    {Page::all()
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li>
                                    <button
                                        class="nav-item"
                                        class:nav-active=move || page.get() == item
                                        on:click=move |_| page.set(item)
                                    >
                                        {item.title()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="sidebar-foot">
                <p>"Disaster Warden"</p>
                <p class="meta">"v0.1.0"</p>
            </div>
        </aside>
    }
}
