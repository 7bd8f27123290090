use crate::api::{ApiClient, ApiError, Car, CatalogLimit};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Car>),
    Failed {
        message: String,
        /// Cars from an earlier successful load, kept on screen.
        previous: Option<Vec<Car>>,
    },
}

impl CatalogState {
    pub fn cars(&self) -> Option<&[Car]> {
        match self {
            CatalogState::Loaded(cars) => Some(cars),
            CatalogState::Failed {
                previous: Some(cars),
                ..
            } => Some(cars),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Applies a finished request, keeping loaded data when a refetch fails.
    pub fn apply(&mut self, result: Result<Vec<Car>, ApiError>) {
        *self = match result {
            Ok(cars) => CatalogState::Loaded(cars),
            Err(err) => CatalogState::Failed {
                message: err.to_string(),
                previous: self.cars().map(<[Car]>::to_vec),
            },
        };
    }
}

/// Hands out increasing tickets; only the newest ticket may apply its result.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Rc<Cell<u64>>,
}

impl RequestSequencer {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[derive(Clone)]
pub struct CatalogRepository {
    client: Rc<ApiClient>,
}

impl CatalogRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch(&self, limit: CatalogLimit) -> Result<Vec<Car>, ApiError> {
        self.client.get_cars(limit).await
    }
}

/// Runs one fetch and applies it only if no newer fetch was issued meanwhile.
pub async fn load_catalog(
    repo: &CatalogRepository,
    sequencer: &RequestSequencer,
    limit: CatalogLimit,
    state: RwSignal<CatalogState>,
) {
    let ticket = sequencer.issue();
    let result = repo.fetch(limit).await;
    if !sequencer.is_current(ticket) {
        log::debug!(
            "Dropping stale catalog response for {} (ticket {})",
            limit.path_segment(),
            ticket
        );
        return;
    }
    if let Err(err) = &result {
        log::error!("Failed to load cars/{}: {}", limit.path_segment(), err);
    }
    let _ = state.try_update(|s| s.apply(result));
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn stale_response_never_overwrites_newer_one() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/cars/6");
            then.status(200)
                .delay(Duration::from_millis(300))
                .json_body(json!([{ "_id": "slow", "name": "Slow" }]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/cars/all");
            then.status(200).json_body(json!([
                { "_id": "a", "name": "A" },
                { "_id": "b", "name": "B" }
            ]));
        });

        let runtime = create_runtime();
        let state = create_rw_signal(CatalogState::Loading);
        let repo = CatalogRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        let sequencer = RequestSequencer::default();

        // Issued first, completes last.
        let slow = load_catalog(&repo, &sequencer, CatalogLimit::First(6), state);
        let fast = load_catalog(&repo, &sequencer, CatalogLimit::All, state);
        futures::join!(slow, fast);

        let ids: Vec<String> = state
            .get()
            .cars()
            .unwrap()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failure_is_applied_as_visible_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/cars/all");
            then.status(500);
        });

        let runtime = create_runtime();
        let state = create_rw_signal(CatalogState::Loading);
        let repo = CatalogRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));
        load_catalog(&repo, &RequestSequencer::default(), CatalogLimit::All, state).await;

        assert!(state.get().error().unwrap().contains("500"));
        runtime.dispose();
    }
}
