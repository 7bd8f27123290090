#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            email: "admin@carzone.test".into(),
            display_name: "Admin User".into(),
            role: "admin".into(),
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            email: "member@carzone.test".into(),
            display_name: "Regular User".into(),
            role: "user".into(),
        }
    }

    pub fn provide_auth_state(state: AuthState) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(state);
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        provide_auth_state(match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        })
    }
}
