use crate::{
    api::CatalogLimit,
    components::{cars_section::CarsSection, layout::Layout},
};
use leptos::*;

#[component]
pub fn CarsPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="max-w-7xl mx-auto pt-10 px-4">
                <h1 class="text-3xl font-bold text-fg">"Explore our cars"</h1>
                <p class="mt-1 text-sm text-fg-muted">"The full catalog, newest listings first."</p>
            </div>
            <CarsSection limit=CatalogLimit::All />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_auth, ssr::render_to_string};

    #[test]
    fn cars_page_renders_heading_and_catalog() {
        let html = render_to_string(|| {
            provide_auth(None);
            view! { <CarsPage /> }
        });
        assert!(html.contains("Explore our cars"));
        assert!(html.contains("animate-spin"));
    }
}
