use super::{repository::AddCarRepository, utils::AddCarFormState};
use crate::{
    api::{ApiClient, ApiError, NewCar},
    state::notification::ProcessOutcome,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AddCarViewModel {
    pub form: RwSignal<AddCarFormState>,
    pub error: RwSignal<Option<String>>,
    pub add_action: Action<NewCar, Result<NewCar, ApiError>>,
}

impl AddCarViewModel {
    pub fn submit(&self) {
        match self.form.with_untracked(AddCarFormState::validate) {
            Ok(car) => {
                self.error.set(None);
                self.add_action.dispatch(car);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

/// Banner message for a finished add request.
pub fn add_outcome(result: &Result<NewCar, ApiError>) -> ProcessOutcome {
    ProcessOutcome::from_result(result, |car| format!("{} was added to the catalog", car.name))
}

pub fn use_add_car_view_model(on_outcome: Callback<ProcessOutcome>) -> AddCarViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AddCarRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(AddCarFormState::default());
    let error = create_rw_signal(None::<String>);

    let add_action = create_action(move |car: &NewCar| {
        let repo = repository.clone();
        let car = car.clone();
        async move { repo.add(car).await }
    });

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            if result.is_ok() {
                form.update(AddCarFormState::reset);
            }
            on_outcome.call(add_outcome(&result));
        }
    });

    AddCarViewModel {
        form,
        error,
        add_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notification::{NotificationCenter, NotificationState};
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;
    use serde_json::json;

    fn civic() -> NewCar {
        NewCar {
            name: "Civic".into(),
            price: 25000.0,
            image: "https://img.example/civic.png".into(),
            description: "Reliable".into(),
        }
    }

    #[test]
    fn add_outcome_maps_both_branches() {
        assert_eq!(
            add_outcome(&Ok(civic())),
            ProcessOutcome::success("Civic was added to the catalog")
        );
        assert_eq!(
            add_outcome(&Err(ApiError::forbidden("Admins only"))),
            ProcessOutcome::error("Admins only")
        );
    }

    #[tokio::test]
    async fn stored_car_is_reported_as_success_banner() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/cars").json_body(json!({
                "name": "Civic",
                "price": 25000.0,
                "image": "https://img.example/civic.png",
                "description": "Reliable"
            }));
            then.status(200).json_body(json!({ "insertedId": "c9" }));
        });

        let runtime = create_runtime();
        let center = NotificationCenter::new();
        let repo = AddCarRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));

        let result = repo.add(civic()).await;
        center.reporter().call(add_outcome(&result));

        create.assert_hits(1);
        assert_eq!(
            center.state().get(),
            NotificationState::Success("Civic was added to the catalog".into())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_car_is_reported_as_error_banner() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/cars");
            then.status(403).json_body(json!({
                "error": "Admins only",
                "code": "FORBIDDEN"
            }));
        });

        let runtime = create_runtime();
        let center = NotificationCenter::new();
        let repo = AddCarRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));

        let result = repo.add(civic()).await;
        center.reporter().call(add_outcome(&result));

        assert_eq!(center.state().get(), NotificationState::Error("Admins only".into()));
        runtime.dispose();
    }

    #[test]
    fn empty_form_is_not_sent() {
        with_runtime(|| {
            let vm = use_add_car_view_model(Callback::new(|_| {}));
            vm.submit();
            assert_eq!(vm.error.get().as_deref(), Some("Please enter the car name"));
            assert!(!vm.add_action.pending().get());
        });
    }
}
