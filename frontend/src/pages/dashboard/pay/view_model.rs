use super::utils::{amount_due, AmountDue};
use crate::{
    api::{ApiClient, ApiError},
    pages::dashboard::orders::repository::OrdersRepository,
    state::auth::use_auth,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct PayViewModel {
    pub due_resource: Resource<Option<String>, Result<AmountDue, ApiError>>,
}

pub fn use_pay_view_model() -> PayViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = OrdersRepository::new_with_client(Rc::new(api));

    let due_resource = create_resource(
        move || auth.with(|state| state.user.as_ref().map(|user| user.email.clone())),
        move |email| {
            let repo = repository.clone();
            async move {
                let email = email.ok_or_else(|| ApiError::unauthorized("Not signed in"))?;
                repo.fetch_own_orders(&email).await.map(amount_due)
            }
        },
    );

    PayViewModel { due_resource }
}
