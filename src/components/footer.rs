use leptos::prelude::*;
use shared::format::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();
    view! {
        <footer class="border-t border-white/10 bg-black/40 py-10">
            <div class="mx-auto flex w-full max-w-6xl flex-col items-center justify-between gap-6 px-6 text-sm text-white/60 sm:flex-row">
                <div class="flex flex-col items-center gap-1 text-center sm:items-start sm:text-left">
                    <span class="font-semibold text-white">"DateSave Studio"</span>
                    <p>"Crafted for modern celebrations • Est. 2024"</p>
                </div>
                <div class="flex flex-wrap items-center justify-center gap-x-6 gap-y-2">
                    <a href="mailto:hello@datesave.studio" class="transition hover:text-white">
                        "Concierge"
                    </a>
                    <a href="#shop" class="transition hover:text-white">"Collections"</a>
                    <a href="#dates" class="transition hover:text-white">"Save a date"</a>
                    <span>"© "{year}" All rights reserved"</span>
                </div>
            </div>
        </footer>
    }
}
