use leptos::prelude::*;
use leptos_icons::Icon;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden rounded-4xl border border-white/10 bg-gradient-to-br from-slate-900/90 via-indigo-950/80 to-slate-950/95 p-12 shadow-[0_60px_120px_-40px_rgba(79,70,229,0.35)]">
            <div class="absolute -left-32 -top-32 h-64 w-64 rounded-full bg-primary-500/40 blur-3xl" />
            <div class="absolute -bottom-40 -right-20 h-80 w-80 rounded-full bg-sky-500/30 blur-3xl" />
            <div class="relative flex flex-col gap-10 lg:flex-row lg:items-center lg:justify-between">
                <div class="max-w-2xl space-y-6">
                    <span class="inline-flex items-center gap-2 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs font-semibold tracking-[0.3em] text-white/60 uppercase">
                        "DateSave Studio"
                    </span>
                    <h1 class="text-4xl font-semibold leading-tight text-white sm:text-5xl">
                        "Shop modern save-the-date suites and lock your celebration timeline in one place."
                    </h1>
                    <p class="text-lg text-white/70">
                        "Discover artful stationery, bundle concierge services, and keep every milestone (rehearsal dinners, welcome parties, afterglows) perfectly organized."
                    </p>
                    <div class="flex flex-col gap-3 text-sm sm:flex-row sm:items-center">
                        <a
                            href="#shop"
                            class="inline-flex items-center justify-center gap-2 rounded-full bg-primary-500 px-6 py-3 font-semibold text-white shadow-lg shadow-primary-500/40 transition hover:bg-primary-600 hover:shadow-xl"
                        >
                            "Browse collections"
                            <Icon width="16" height="16" icon=icondata::LuArrowRight />
                        </a>
                        <a
                            href="#dates"
                            class="inline-flex items-center justify-center gap-2 rounded-full border border-white/20 px-6 py-3 font-semibold text-white/80 transition hover:border-white hover:text-white"
                        >
                            <Icon width="16" height="16" icon=icondata::LuCalendar />
                            "Save your date"
                        </a>
                    </div>
                </div>
                <div class="relative flex h-full w-full max-w-md flex-col gap-4 rounded-3xl border border-white/10 bg-white/5 p-8">
                    <div class="flex items-center justify-between text-sm text-white/60">
                        <span class="uppercase tracking-[0.3em]">"Next drop"</span>
                        <span>"April 28"</span>
                    </div>
                    <div class="rounded-2xl bg-gradient-to-br from-primary-500/80 via-sky-500/70 to-emerald-500/60 p-8 text-white shadow-[inset_0_1px_0_rgba(255,255,255,0.4)]">
                        <p class="text-sm uppercase tracking-[0.35em] text-white/70">"Spotlight suite"</p>
                        <h2 class="mt-2 text-2xl font-semibold">"Lumen Cascade"</h2>
                        <p class="mt-4 text-sm text-white/80">
                            "Iridescent foil, vellum overlay, and a micro-site animation for hybrid celebrations."
                        </p>
                    </div>
                    <div class="rounded-2xl border border-white/10 bg-black/30 p-6 text-sm text-white/70">
                        <p class="font-semibold text-white">"Concierge calendar opens Friday at 10 AM EST."</p>
                        <p class="mt-2">
                            "Secure a design slot now to receive curated palettes, typography, and print specs within 48 hours."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
