use crate::{
    api::CatalogLimit,
    components::{cars_section::CarsSection, layout::Layout},
    config::HOME_CATALOG_LIMIT,
};
use leptos::*;

const REASONS: &[(&str, &str, &str)] = &[
    ("fas fa-hand-holding-usd", "Fair prices", "Transparent pricing with no hidden fees."),
    ("fas fa-shield-alt", "Inspected cars", "Every car passes a full inspection before listing."),
    ("fas fa-headset", "Support", "Our team is available around the clock."),
];

#[component]
fn HomeBanner() -> impl IntoView {
    view! {
        <div class="bg-surface-muted">
            <div class="max-w-7xl mx-auto py-16 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "Find the car that fits your road"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                    "Rent or buy from a hand-picked catalog of new and pre-owned cars."
                </p>
            </div>
        </div>
    }
}

#[component]
fn WhyUsSection() -> impl IntoView {
    view! {
        <div class="max-w-7xl mx-auto px-4 grid grid-cols-1 gap-6 md:grid-cols-3">
            {REASONS
                .iter()
                .map(|(icon, title, text)| view! {
                    <div class="text-center p-6">
                        <i class=format!("{} text-3xl text-action-primary-bg", icon)></i>
                        <h3 class="mt-3 text-lg font-semibold text-fg">{*title}</h3>
                        <p class="mt-1 text-sm text-fg-muted">{*text}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ReviewSection() -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto py-16 px-4 text-center">
            <h2 class="text-2xl font-bold text-fg">"What our customers say"</h2>
            <p class="mt-3 text-fg-muted">
                "Signed-in customers can share their experience from the dashboard."
            </p>
            <a href="/dashboard/review/add" class="mt-4 inline-block text-action-primary-bg underline">
                "Write a review"
            </a>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <HomeBanner />
            <section class="pt-24 pb-12">
                <WhyUsSection />
            </section>
            <section>
                <CarsSection limit=CatalogLimit::First(HOME_CATALOG_LIMIT) />
                <div class="text-center my-12">
                    <a
                        href="/cars"
                        class="inline-block px-8 py-3 text-xl rounded border border-action-primary-bg text-action-primary-bg hover:bg-action-ghost-bg-hover"
                    >
                        "View More"
                    </a>
                </div>
            </section>
            <section class="bg-surface-muted">
                <ReviewSection />
            </section>
        </Layout>
    }
}
