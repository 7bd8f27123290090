use super::{repository::ReviewRepository, utils::ReviewFormState};
use crate::{
    api::{Acknowledgement, ApiClient, ApiError, NewReview},
    state::{auth::use_auth, notification::ProcessOutcome},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ReviewViewModel {
    pub form: RwSignal<ReviewFormState>,
    pub error: RwSignal<Option<String>>,
    pub submit_action: Action<NewReview, Result<Acknowledgement, ApiError>>,
}

impl ReviewViewModel {
    pub fn submit(&self) {
        match self.form.with_untracked(ReviewFormState::validate) {
            Ok(review) => {
                self.error.set(None);
                self.submit_action.dispatch(review);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn review_outcome(result: &Result<Acknowledgement, ApiError>) -> ProcessOutcome {
    ProcessOutcome::from_result(result, |_| "Thanks for your review!".to_string())
}

pub fn use_review_view_model(on_outcome: Callback<ProcessOutcome>) -> ReviewViewModel {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReviewRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(auth.with_untracked(|state| ReviewFormState::for_user(state.user.as_ref())));
    let error = create_rw_signal(None::<String>);

    let submit_action = create_action(move |review: &NewReview| {
        let repo = repository.clone();
        let review = review.clone();
        async move { repo.submit(review).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            if result.is_ok() {
                form.update(ReviewFormState::reset);
            }
            on_outcome.call(review_outcome(&result));
        }
    });

    ReviewViewModel {
        form,
        error,
        submit_action,
    }
}
