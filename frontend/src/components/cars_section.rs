use crate::{
    api::{ApiClient, CatalogLimit},
    components::{
        car_card::CarCard,
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    state::catalog::{load_catalog, CatalogRepository, CatalogState, RequestSequencer},
};
use leptos::*;
use std::rc::Rc;

/// Fetches the catalog for `limit` and lays out one card per car.
///
/// The request is re-issued whenever `limit` changes; a response that arrives
/// after a newer request was issued is discarded.
#[component]
pub fn CarsSection(#[prop(optional, into)] limit: MaybeSignal<CatalogLimit>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = CatalogRepository::new_with_client(Rc::new(api));
    let sequencer = RequestSequencer::default();
    let state = create_rw_signal(CatalogState::Loading);
    let reload = create_rw_signal(0u32);

    create_effect(move |_| {
        let limit = limit.get();
        let _ = reload.get();
        let repo = repo.clone();
        let sequencer = sequencer.clone();
        spawn_local(async move {
            load_catalog(&repo, &sequencer, limit, state).await;
        });
    });

    let on_retry = Callback::new(move |_| reload.update(|n| *n = n.wrapping_add(1)));

    view! { <CatalogGrid state=state.into() on_retry=on_retry /> }
}

#[component]
pub fn CatalogGrid(state: Signal<CatalogState>, on_retry: Callback<()>) -> impl IntoView {
    let error = move || {
        state.with(|s| s.error().map(str::to_string)).map(|message| {
            view! {
                <div class="mb-6">
                    <ErrorMessage message=format!("Could not load cars: {}", message) />
                    <button
                        class="px-4 py-2 text-sm rounded border border-border hover:bg-action-ghost-bg-hover"
                        on:click=move |_| on_retry.call(())
                    >
                        "Try again"
                    </button>
                </div>
            }
        })
    };

    let cards = move || match state.with(|s| s.cars().map(|cars| cars.to_vec())) {
        None if state.with(|s| matches!(s, CatalogState::Loading)) => {
            view! { <LoadingSpinner /> }.into_view()
        }
        None => ().into_view(),
        Some(cars) if cars.is_empty() => view! {
            <EmptyState title="No cars available right now" description="Please check back soon." />
        }
        .into_view(),
        Some(cars) => view! {
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {cars.into_iter().map(|car| view! { <CarCard car=car /> }).collect_view()}
            </div>
        }
        .into_view(),
    };

    view! {
        <section class="max-w-7xl mx-auto p-4">
            {error}
            {cards}
        </section>
    }
}
