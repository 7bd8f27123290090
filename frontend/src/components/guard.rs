use crate::{components::layout::LoadingSpinner, state::auth::{use_auth, AuthState}, utils::viewport};
use leptos::*;

/// What a route requires of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Authenticated,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allowed,
    /// The session check has not finished yet.
    Pending,
    Unauthenticated,
    Forbidden,
}

pub fn authorize(access: Access, auth: &AuthState) -> Authorization {
    if auth.loading {
        return Authorization::Pending;
    }
    if !auth.is_authenticated {
        return Authorization::Unauthenticated;
    }
    match access {
        Access::Authenticated => Authorization::Allowed,
        Access::Admin if auth.is_admin() => Authorization::Allowed,
        Access::Admin => Authorization::Forbidden,
    }
}

fn redirect_when_unauthenticated(decision: Memo<Authorization>) {
    create_effect(move |_| {
        if decision.get() == Authorization::Unauthenticated {
            viewport::navigate("/login");
        }
    });
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! { <RequireRole access=Access::Authenticated>{children()}</RequireRole> }
}

/// Builds `children` only when the current user satisfies `access`.
#[component]
pub fn RequireRole(access: Access, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| authorize(access, &auth.get()));
    redirect_when_unauthenticated(decision);

    view! {
        <Show
            when=move || decision.get() == Authorization::Allowed
            fallback=move || match decision.get() {
                Authorization::Pending => view! { <LoadingSpinner /> }.into_view(),
                Authorization::Forbidden => view! { <Forbidden /> }.into_view(),
                _ => ().into_view(),
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn Forbidden() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6" data-testid="forbidden">
            <h2 class="text-lg font-medium text-fg">"Access denied"</h2>
            <p class="mt-1 text-sm text-fg-muted">
                "This section is only available to administrators."
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};

    #[test]
    fn authorize_waits_for_session_check() {
        let loading = AuthState {
            loading: true,
            ..AuthState::default()
        };
        assert_eq!(authorize(Access::Authenticated, &loading), Authorization::Pending);
        assert_eq!(authorize(Access::Admin, &loading), Authorization::Pending);
    }

    #[test]
    fn authorize_rejects_anonymous_users() {
        let anonymous = AuthState::signed_out();
        assert_eq!(
            authorize(Access::Authenticated, &anonymous),
            Authorization::Unauthenticated
        );
        assert_eq!(authorize(Access::Admin, &anonymous), Authorization::Unauthenticated);
    }

    #[test]
    fn admin_access_requires_admin_role() {
        let member = AuthState::signed_in(regular_user());
        let admin = AuthState::signed_in(admin_user());
        assert_eq!(authorize(Access::Authenticated, &member), Authorization::Allowed);
        assert_eq!(authorize(Access::Admin, &member), Authorization::Forbidden);
        assert_eq!(authorize(Access::Admin, &admin), Authorization::Allowed);
    }
}
