use crate::state::notification::{NotificationCenter, NotificationState};
use leptos::{html::Div, *};
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Success,
    Error,
}

impl Severity {
    fn classes(self) -> &'static str {
        match self {
            Severity::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            Severity::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Success => "fas fa-check-circle",
            Severity::Error => "fas fa-exclamation-circle",
        }
    }
}

/// Bottom-left snackbar for the dashboard's current notification.
#[component]
pub fn NotificationBanner(center: NotificationCenter) -> impl IntoView {
    let state = center.state();
    let banner_ref = create_node_ref::<Div>();

    // Any click outside the banner dismisses it.
    let handle = window_event_listener(ev::click, move |event| {
        if !state.get_untracked().is_visible() {
            return;
        }
        let Some(banner) = banner_ref.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| banner.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            center.dismiss();
        }
    });
    on_cleanup(move || handle.remove());

    let content = move || {
        let (severity, message) = match state.get() {
            NotificationState::Hidden => return None,
            NotificationState::Success(message) => (Severity::Success, message),
            NotificationState::Error(message) => (Severity::Error, message),
        };
        let role = if severity == Severity::Error { "alert" } else { "status" };
        Some(view! {
            <div
                class=format!("flex items-center gap-3 border px-4 py-3 rounded shadow-lg w-full {}", severity.classes())
                role=role
                data-severity=severity.name()
            >
                <i class=severity.icon()></i>
                <p class="text-sm flex-1">{message}</p>
                <button
                    type="button"
                    class="text-sm font-medium opacity-70 hover:opacity-100"
                    aria-label="Close"
                    on:click=move |_| center.dismiss()
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
        })
    };

    view! {
        <div node_ref=banner_ref class="fixed bottom-6 left-6 z-50 max-w-md">
            {content}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notification::ProcessOutcome;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn hidden_state_renders_no_alert() {
        let html = render_to_string(move || {
            let center = NotificationCenter::new();
            view! { <NotificationBanner center=center /> }
        });
        assert!(!html.contains("data-severity"));
    }

    #[test]
    fn success_outcome_renders_single_success_banner() {
        let html = render_to_string(move || {
            let center = NotificationCenter::new();
            center.report(ProcessOutcome::success("Car added"));
            view! { <NotificationBanner center=center /> }
        });
        assert!(html.contains("Car added"));
        assert!(html.contains("data-severity=\"success\""));
        assert!(!html.contains("data-severity=\"error\""));
    }

    #[test]
    fn error_outcome_never_renders_success_banner() {
        let html = render_to_string(move || {
            let center = NotificationCenter::new();
            center.report(ProcessOutcome {
                success: Some("stale success".into()),
                error: Some("Could not save".into()),
            });
            view! { <NotificationBanner center=center /> }
        });
        assert!(html.contains("Could not save"));
        assert!(html.contains("data-severity=\"error\""));
        assert!(!html.contains("data-severity=\"success\""));
        assert!(!html.contains("stale success"));
    }

    #[test]
    fn dismissed_banner_renders_nothing() {
        let html = render_to_string(move || {
            let center = NotificationCenter::new();
            center.report(ProcessOutcome::success("gone"));
            center.dismiss();
            view! { <NotificationBanner center=center /> }
        });
        assert!(!html.contains("gone"));
    }
}
