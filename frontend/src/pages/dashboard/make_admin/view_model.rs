use super::{repository::MakeAdminRepository, utils::validate_admin_email};
use crate::{
    api::{ApiClient, ApiError, MakeAdminRequest},
    state::notification::ProcessOutcome,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct MakeAdminViewModel {
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub promote_action: Action<MakeAdminRequest, Result<MakeAdminRequest, ApiError>>,
}

impl MakeAdminViewModel {
    pub fn submit(&self) {
        match self.email.with_untracked(|email| validate_admin_email(email)) {
            Ok(request) => {
                self.error.set(None);
                self.promote_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn promote_outcome(result: &Result<MakeAdminRequest, ApiError>) -> ProcessOutcome {
    ProcessOutcome::from_result(result, |request| format!("{} is now an admin", request.email))
}

pub fn use_make_admin_view_model(on_outcome: Callback<ProcessOutcome>) -> MakeAdminViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = MakeAdminRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let promote_action = create_action(move |request: &MakeAdminRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.promote(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = promote_action.value().get() {
            if result.is_ok() {
                email.set(String::new());
            }
            on_outcome.call(promote_outcome(&result));
        }
    });

    MakeAdminViewModel {
        email,
        error,
        promote_action,
    }
}
