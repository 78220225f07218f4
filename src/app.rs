use crate::models::StudioContext;
use crate::pages::home::Home;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use shared::{products, StudioConfig};

#[component]
pub fn App(config: StudioConfig) -> impl IntoView {
    let studio_context = StudioContext::new(&config, products());
    provide_context(studio_context);
    view! {
        <div class="relative flex min-h-screen flex-col overflow-hidden">
            <Router>
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=Home />
                    <Route
                        path=path!("/*any")
                        view=|| view! { <h1 class="p-12 text-2xl text-white">"Not Found"</h1> }
                    />
                </Routes>
            </Router>
            {move || {
                studio_context
                    .storage_warning()
                    .map(|warning| {
                        view! {
                            <div class="fixed inset-x-4 bottom-4 rounded-2xl border border-rose-500/40 bg-rose-950/90 px-5 py-3 text-sm font-medium text-rose-200 shadow-lg">
                                {warning}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
