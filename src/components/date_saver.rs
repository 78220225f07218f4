use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use shared::{FormField, SaveStatus};

use crate::components::saved_date_card::SavedDateCard;
use crate::models::StudioContext;

const INPUT_CLASS: &str = "rounded-2xl border border-white/10 bg-white/5 px-4 py-3 text-base text-white placeholder:text-white/40 focus:border-primary-500 focus:outline-none focus:ring-2 focus:ring-primary-500/50";
const LABEL_CLASS: &str = "flex flex-col gap-2 text-sm font-medium text-white/80";

fn toggle_class(active: bool) -> &'static str {
    if active {
        "rounded-full px-4 py-2 text-sm font-medium transition bg-primary-500 text-white"
    } else {
        "rounded-full px-4 py-2 text-sm font-medium transition bg-white/5 text-white/70 hover:bg-white/10"
    }
}

/// Form for saving a celebration date, next to the list of dates already saved in this browser.
#[component]
pub fn DateSaver() -> impl IntoView {
    let studio_context = expect_context::<StudioContext>();
    let store = studio_context.store;
    let catalog = studio_context.catalog;

    let field_value =
        move |field: FormField| move || store.with(|store| store.form().field(field).to_string());
    let on_field = move |field: FormField| {
        move |ev: Event| {
            let value = event_target_value(&ev);
            store.update(|store| store.update_field(field, value));
        }
    };
    let is_selected = move |product_id: Option<&'static str>| {
        move || store.with(|store| store.form().product_id.as_deref() == product_id)
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        store.update(|store| match store.create() {
            Ok(record) => log::info!("saved \"{}\" on {}", record.label, record.date),
            Err(e) => log::info!("save rejected: {}", e),
        });
    };
    let on_clear = move |_| store.update(|store| store.reset_form());

    let chosen_product = move || {
        store
            .with(|store| store.selected_product(catalog))
            .map(|product| {
                view! {
                    <p class="text-xs text-white/60">
                        "Selected bundle: "
                        <span class="font-semibold text-white">{product.name.as_str()}</span>
                        " · "
                        {product.price.as_str()}
                    </p>
                }
            })
    };
    let status_message = move || match store.with(|store| store.status()) {
        SaveStatus::Saved => view! {
            <p class="text-sm font-medium text-emerald-300">
                "Date saved! We'll remember this when you return."
            </p>
        }
        .into_any(),
        SaveStatus::Error => view! {
            <p class="text-sm font-medium text-rose-300">
                "Add an event title and date before saving."
            </p>
        }
        .into_any(),
        SaveStatus::Idle => ().into_any(),
    };
    let record_count = move || store.with(|store| store.records().len());
    let no_records = move || store.with(|store| store.records().is_empty());

    view! {
        <div class="glass-panel relative overflow-hidden rounded-4xl p-8 sm:p-12">
            <div class="absolute inset-0 -z-10 opacity-30">
                <div class="grid-pattern h-full w-full" />
            </div>
            <div class="flex flex-col gap-8 lg:flex-row lg:items-start">
                <form
                    on:submit=on_submit
                    data-status=move || store.with(|store| store.status().as_ref().to_string())
                    class="flex w-full flex-1 flex-col gap-6 rounded-3xl bg-slate-900/60 p-6 shadow-inner shadow-black/30"
                >
                    <header class="flex flex-col gap-2">
                        <h2 class="text-2xl font-semibold text-white">"Save a celebration date"</h2>
                        <p class="text-sm text-white/70">
                            "Capture the headline details, pair it with a design, and we will keep it ready for your next visit."
                        </p>
                    </header>

                    <label class=LABEL_CLASS>
                        "Event title"
                        <input
                            type="text"
                            required
                            prop:value=field_value(FormField::Label)
                            on:input=on_field(FormField::Label)
                            placeholder="Alex & Jordan · Sunset Welcome Party"
                            class=INPUT_CLASS
                        />
                    </label>

                    <div class="grid gap-4 sm:grid-cols-2">
                        <label class=LABEL_CLASS>
                            "Occasion"
                            <input
                                type="text"
                                prop:value=field_value(FormField::EventType)
                                on:input=on_field(FormField::EventType)
                                placeholder="Rehearsal Dinner"
                                class=INPUT_CLASS
                            />
                        </label>
                        <label class=LABEL_CLASS>
                            "Date"
                            <input
                                type="date"
                                required
                                prop:value=field_value(FormField::Date)
                                on:input=on_field(FormField::Date)
                                class=INPUT_CLASS
                            />
                        </label>
                    </div>

                    <label class=LABEL_CLASS>
                        "Location"
                        <input
                            type="text"
                            prop:value=field_value(FormField::Location)
                            on:input=on_field(FormField::Location)
                            placeholder="Maui, Hawaii"
                            class=INPUT_CLASS
                        />
                    </label>

                    <label class=LABEL_CLASS>
                        "Notes for the designer"
                        <textarea
                            rows="4"
                            prop:value=field_value(FormField::Note)
                            on:input=on_field(FormField::Note)
                            placeholder="Include our monogram and a seaside motif."
                            class=INPUT_CLASS
                        />
                    </label>

                    <div class="space-y-3 rounded-3xl bg-black/40 p-4">
                        <p class="text-sm font-semibold uppercase tracking-widest text-white/50">
                            "Bundle with a design"
                        </p>
                        <div class="flex flex-wrap gap-2">
                            <button
                                type="button"
                                on:click=move |_| store.update(|store| store.select_product(None))
                                class=move || toggle_class(is_selected(None)())
                            >
                                "Decide later"
                            </button>
                            {catalog
                                .iter()
                                .map(|product| {
                                    let id = product.id.as_str();
                                    view! {
                                        <button
                                            type="button"
                                            on:click=move |_| {
                                                store.update(|store| store.select_product(Some(id.to_string())))
                                            }
                                            class=move || toggle_class(is_selected(Some(id))())
                                        >
                                            {product.name.as_str()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {chosen_product}
                    </div>

                    <div class="flex flex-col gap-3 sm:flex-row">
                        <button
                            type="submit"
                            class="flex-1 rounded-full bg-primary-500 px-6 py-3 text-base font-semibold text-white shadow-lg shadow-primary-500/30 transition hover:bg-primary-600 hover:shadow-xl hover:shadow-primary-500/40"
                        >
                            "Save the date"
                        </button>
                        <button
                            type="button"
                            on:click=on_clear
                            class="rounded-full border border-white/10 px-6 py-3 text-sm font-medium text-white/70 transition hover:border-white/30 hover:text-white"
                        >
                            "Clear form"
                        </button>
                    </div>
                    {status_message}
                </form>

                <aside class="flex w-full flex-1 flex-col gap-4 rounded-3xl border border-white/5 bg-white/5 p-6">
                    <header class="flex items-start justify-between">
                        <div>
                            <h3 class="text-xl font-semibold text-white">"Saved itineraries"</h3>
                            <p class="text-sm text-white/60">"Synced locally • Bring them back anytime"</p>
                        </div>
                        <span class="rounded-full bg-primary-500/20 px-3 py-1 text-xs font-semibold text-primary-100">
                            {record_count}
                        </span>
                    </header>

                    <div class="flex flex-col gap-4 overflow-y-auto pr-1">
                        <Show when=no_records>
                            <div class="rounded-2xl border border-white/10 bg-black/30 p-6 text-sm text-white/60">
                                "Your saved celebrations will appear here. Create your first one to unlock timeline reminders and handoff files."
                            </div>
                        </Show>
                        <For
                            each=move || store.with(|store| store.records().to_vec())
                            key=|record| record.id.clone()
                            children=move |record| view! { <SavedDateCard record=record /> }
                        />
                    </div>
                </aside>
            </div>
        </div>
    }
}
