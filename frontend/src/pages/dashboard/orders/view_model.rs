use super::{repository::OrdersRepository, utils::OrderAction};
use crate::{
    api::{ApiClient, ApiError, Order},
    state::{auth::use_auth, notification::ProcessOutcome},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct OrdersViewModel {
    pub is_admin: Memo<bool>,
    pub reload: RwSignal<u32>,
    pub orders_resource: Resource<u32, Result<Vec<Order>, ApiError>>,
    pub order_action: Action<OrderAction, Result<OrderAction, ApiError>>,
}

pub fn action_outcome(result: &Result<OrderAction, ApiError>) -> ProcessOutcome {
    ProcessOutcome::from_result(result, |action| action.success_message().to_string())
}

pub fn use_orders_view_model(on_outcome: Callback<ProcessOutcome>) -> OrdersViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = OrdersRepository::new_with_client(Rc::new(api));

    let is_admin = create_memo(move |_| auth.with(|state| state.is_admin()));
    let reload = create_rw_signal(0u32);

    let repo_for_resource = repository.clone();
    let orders_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            let viewer = auth.get_untracked().user;
            async move {
                match viewer {
                    Some(viewer) => repo.fetch_orders(&viewer).await,
                    None => Err(ApiError::unauthorized("Not signed in")),
                }
            }
        },
    );

    let repo_for_action = repository;
    let order_action = create_action(move |action: &OrderAction| {
        let repo = repo_for_action.clone();
        let action = action.clone();
        async move {
            match &action {
                OrderAction::Cancel(id) => repo.cancel(id).await?,
                OrderAction::Approve(id) => repo.approve(id).await?,
            }
            Ok::<_, ApiError>(action)
        }
    });

    create_effect(move |_| {
        if let Some(result) = order_action.value().get() {
            if let Ok(action) = &result {
                log::info!("{} ({})", action.success_message(), action.order_id());
                reload.update(|value| *value = value.wrapping_add(1));
            }
            on_outcome.call(action_outcome(&result));
        }
    });

    OrdersViewModel {
        is_admin,
        reload,
        orders_resource,
        order_action,
    }
}
