use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::viewport;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.with_untracked(LoginFormState::validate) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = create_rw_signal(LoginFormState::default());
    let error = create_rw_signal(None::<String>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    error.set(None);
                    form.update(LoginFormState::clear_password);
                    viewport::navigate("/dashboard");
                }
                Err(err) => {
                    log::warn!("Login failed: {}", err);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
