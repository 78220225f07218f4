use leptos::prelude::*;
use leptos_icons::Icon;
use shared::format::{display_created_at, display_date, display_label};
use shared::{find_product, SavedDateRecord};

use crate::models::StudioContext;

#[component]
fn Detail(term: &'static str, value: String, #[prop(optional)] wide: bool) -> impl IntoView {
    let class = if wide { "sm:col-span-2" } else { "" };
    view! {
        <div class=class>
            <dt class="uppercase tracking-[0.2em] text-white/30">{term}</dt>
            <dd class="text-sm text-white/70">{value}</dd>
        </div>
    }
}

#[component]
pub fn SavedDateCard(record: SavedDateRecord) -> impl IntoView {
    let studio_context = expect_context::<StudioContext>();
    let store = studio_context.store;
    let bundle = record
        .product_id
        .as_deref()
        .and_then(|id| find_product(studio_context.catalog, id))
        .map(|product| format!("{} · {}", product.name, product.price));

    let SavedDateRecord {
        id,
        label,
        event_type,
        date,
        location,
        note,
        created_at,
        ..
    } = record;
    let on_remove = move |_| {
        store.update(|store| {
            store.delete(&id);
        });
    };

    view! {
        <article class="group rounded-2xl border border-white/10 bg-black/40 p-5 transition hover:border-primary-500/40 hover:bg-black/30">
            <div class="flex items-start justify-between gap-4">
                <div class="flex flex-col">
                    <h4 class="text-base font-semibold text-white">
                        {display_label(&label).to_string()}
                    </h4>
                    <span class="text-sm text-white/50">{display_date(&date)}</span>
                </div>
                <button
                    on:click=on_remove
                    class="inline-flex items-center gap-1 rounded-full bg-white/5 px-3 py-1 text-xs font-medium text-white/60 transition hover:bg-rose-500/20 hover:text-white"
                >
                    <Icon width="12" height="12" icon=icondata::LuTrash />
                    "Remove"
                </button>
            </div>
            <dl class="grid gap-2 pt-3 text-xs text-white/60 sm:grid-cols-2">
                {(!event_type.is_empty())
                    .then(move || view! { <Detail term="Occasion" value=event_type /> })}
                {(!location.is_empty())
                    .then(move || view! { <Detail term="Location" value=location /> })}
                {bundle.map(|bundle| view! { <Detail term="Bundle" value=bundle wide=true /> })}
                {(!note.is_empty()).then(move || view! { <Detail term="Notes" value=note wide=true /> })}
            </dl>
            <p class="pt-3 text-xs text-white/40">"Added "{display_created_at(created_at)}</p>
        </article>
    }
}
