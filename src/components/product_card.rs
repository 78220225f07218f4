use leptos::prelude::*;
use leptos_icons::Icon;
use shared::Product;

use crate::models::StudioContext;

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    view! {
        <article class="group relative flex flex-col gap-4 rounded-3xl border border-white/10 bg-white/5 p-6 transition-all duration-300 hover:-translate-y-1 hover:border-white/25 hover:bg-white/10 hover:shadow-2xl hover:shadow-indigo-500/20">
            <span class=format!(
                "h-32 w-full rounded-2xl bg-gradient-to-br {} opacity-90 transition-opacity group-hover:opacity-100",
                product.accent,
            ) />
            <div class="flex items-center justify-between gap-2">
                <h3 class="text-lg font-semibold text-white">{product.name.as_str()}</h3>
                <span class="rounded-full bg-white/10 px-3 py-1 text-sm font-medium text-white/80">
                    {product.price.as_str()}
                </span>
            </div>
            <p class="text-sm text-white/70">{product.description.as_str()}</p>
            <div class="flex flex-wrap gap-2">
                {product
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-full bg-white/5 px-3 py-1 text-xs font-medium text-white/60">
                                {tag.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <span class="absolute inset-x-6 bottom-6 hidden items-center justify-center gap-2 text-sm font-semibold text-primary-100 transition-opacity group-hover:flex">
                "Preview & customize"
                <Icon width="14" height="14" icon=icondata::LuArrowRight />
            </span>
        </article>
    }
}

#[component]
pub fn ProductGrid() -> impl IntoView {
    let catalog = use_context::<StudioContext>()
        .map(|context| context.catalog)
        .unwrap_or_else(shared::products);
    view! {
        <div class="flex flex-col gap-4 sm:flex-row sm:items-end sm:justify-between">
            <div>
                <h2 class="text-3xl font-semibold text-white">"Signature collections"</h2>
                <p class="text-sm text-white/60">
                    "Curated palettes crafted for the moments you don't want to forget."
                </p>
            </div>
            <a
                href="mailto:hello@datesave.studio"
                class="inline-flex items-center gap-2 rounded-full border border-white/15 bg-white/5 px-5 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-white/70 transition hover:border-white/40 hover:text-white"
            >
                <Icon width="14" height="14" icon=icondata::LuMail />
                "Request bespoke"
            </a>
        </div>
        <div class="grid gap-6 md:grid-cols-2">
            {catalog
                .iter()
                .map(|product| view! { <ProductCard product=product /> })
                .collect_view()}
        </div>
    }
}
