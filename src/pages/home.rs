use crate::components::date_saver::DateSaver;
use crate::components::feature_list::FeatureList;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::product_card::ProductGrid;
use crate::components::testimonials::Testimonials;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main class="mx-auto flex w-full max-w-6xl flex-1 flex-col gap-24 px-6 pb-24 pt-32 sm:px-10 lg:px-16">
            <Hero />

            <section id="shop" class="space-y-10">
                <ProductGrid />
            </section>

            <section class="space-y-8">
                <div class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between">
                    <div>
                        <h2 class="text-3xl font-semibold text-white">
                            "Everything you need to announce beautifully"
                        </h2>
                        <p class="text-sm text-white/60">
                            "Concierge services and smart tooling keep your guests perfectly in sync."
                        </p>
                    </div>
                    <span class="rounded-full border border-emerald-500/40 bg-emerald-500/10 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-emerald-200">
                        "New • Timeline automation"
                    </span>
                </div>
                <FeatureList />
            </section>

            <section id="dates">
                <DateSaver />
            </section>

            <section class="space-y-6">
                <div class="flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                    <h2 class="text-3xl font-semibold text-white">
                        "Couples who saved their date with us"
                    </h2>
                    <span class="rounded-full border border-white/10 bg-white/5 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-white/60">
                        "4.9 ★ experience rating"
                    </span>
                </div>
                <Testimonials />
            </section>
        </main>
        <Footer />
    }
}
