use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Leah & Morgan",
        role: "Miami • Spring 2024",
        quote: "DateSave Studio was our planning anchor. We saved every event, matched the perfect designs, and our guests were blown away by the cohesive reveal.",
    },
    Testimonial {
        name: "Kaito & Ren",
        role: "Tokyo • Winter 2023",
        quote: "The concierge team customized our bilingual suite in two days. Having our timeline synced with the designs kept everything effortlessly organized.",
    },
    Testimonial {
        name: "Priya & Ezra",
        role: "Lisbon • Summer 2025",
        quote: "We loved the dynamic previews and local reminders. It felt like a luxe studio experience without the endless email back-and-forth.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <div class="grid gap-6 lg:grid-cols-3">
            {TESTIMONIALS
                .iter()
                .map(|item| {
                    view! {
                        <blockquote class="relative rounded-3xl border border-white/5 bg-gradient-to-br from-white/10 via-white/5 to-white/0 p-8 text-white shadow-lg shadow-indigo-500/10 before:absolute before:left-6 before:top-6 before:text-5xl before:text-white/20 before:content-['“']">
                            <p class="text-sm leading-relaxed text-white/80">{item.quote}</p>
                            <footer class="mt-6 flex flex-col text-sm font-semibold text-white">
                                {item.name}
                                <span class="text-xs font-normal uppercase tracking-[0.3em] text-white/50">
                                    {item.role}
                                </span>
                            </footer>
                        </blockquote>
                    }
                })
                .collect_view()}
        </div>
    }
}
