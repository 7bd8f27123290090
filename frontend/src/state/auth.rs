use crate::{
    api::{ApiClient, ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
};
use leptos::*;
use std::rc::Rc;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.user.as_ref().map(UserResponse::is_admin).unwrap_or(false)
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState {
        loading: true,
        ..AuthState::default()
    });

    let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_effect(move |_| {
        let api_client = api_client.clone();
        spawn_local(async move {
            match api_client.get_me().await {
                Ok(user) => {
                    log::info!("Restored session for {}", user.email);
                    set_auth_state.set(AuthState::signed_in(user));
                }
                Err(err) if err.is_unauthorized() => {
                    log::debug!("No active session: {}", err);
                    set_auth_state.set(AuthState::signed_out());
                }
                Err(err) => {
                    log::warn!("Session check failed: {}", err);
                    set_auth_state.set(AuthState::signed_out());
                }
            }
        });
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::signed_out());
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));
    Callback::new(move |_| logout(&repo, set_auth))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: &str) -> UserResponse {
        UserResponse {
            email: "alice@example.com".into(),
            display_name: "Alice".into(),
            role: role.into(),
        }
    }

    #[test]
    fn admin_requires_authenticated_admin_user() {
        assert!(!AuthState::signed_out().is_admin());
        assert!(!AuthState::signed_in(user("user")).is_admin());
        assert!(AuthState::signed_in(user("admin")).is_admin());

        let stale = AuthState {
            user: Some(user("admin")),
            is_authenticated: false,
            loading: false,
        };
        assert!(!stale.is_admin());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use httpmock::prelude::*;

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(200).json_body(serde_json::json!({
                "access_token": "tok-1",
                "user": { "email": "alice@example.com", "display_name": "Alice", "role": "admin" }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.base_url());
        let repo = LoginRepository::new_with_client(Rc::new(api));

        login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.is_admin());

        logout(&repo, set_state);
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_clears_loading_flag() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401).json_body(serde_json::json!({
                "error": "Invalid credentials",
                "code": "UNAUTHORIZED"
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let repo = LoginRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )));

        let err = login_request(
            LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert!(!state.get().loading);
        assert!(!state.get().is_authenticated);
        runtime.dispose();
    }
}
