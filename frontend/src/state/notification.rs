//! Dashboard-wide transient notification.
//!
//! Feature panels report the outcome of a remote action through a
//! [`Callback<ProcessOutcome>`]; the dashboard shows it as a single banner
//! until it is dismissed or its auto-hide timer fires.

use crate::config::NOTIFICATION_AUTO_HIDE_MS;
use leptos::*;

/// Result of a panel action. At most one field is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl ProcessOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }

    pub fn from_result<T, E: std::fmt::Display>(
        result: &Result<T, E>,
        success: impl FnOnce(&T) -> String,
    ) -> Self {
        match result {
            Ok(value) => Self::success(success(value)),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NotificationState {
    #[default]
    Hidden,
    Success(String),
    Error(String),
}

impl NotificationState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, NotificationState::Hidden)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            NotificationState::Hidden => None,
            NotificationState::Success(text) | NotificationState::Error(text) => Some(text),
        }
    }
}

impl From<ProcessOutcome> for NotificationState {
    /// An error wins when both fields are set.
    fn from(outcome: ProcessOutcome) -> Self {
        match outcome {
            ProcessOutcome {
                error: Some(error), ..
            } => NotificationState::Error(error),
            ProcessOutcome {
                success: Some(success),
                ..
            } => NotificationState::Success(success),
            _ => NotificationState::Hidden,
        }
    }
}

/// Hidden/Visible state machine. Every report bumps a generation so that an
/// expiring timer only hides the notification it was started for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationMachine {
    state: NotificationState,
    generation: u64,
}

impl NotificationMachine {
    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the generation to expire later, or `None` for an empty outcome.
    pub fn report(&mut self, outcome: ProcessOutcome) -> Option<u64> {
        self.show(NotificationState::from(outcome))
    }

    pub fn show(&mut self, next: NotificationState) -> Option<u64> {
        if !next.is_visible() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = next;
        Some(self.generation)
    }

    pub fn dismiss(&mut self) {
        self.state = NotificationState::Hidden;
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.state.is_visible() {
            return false;
        }
        self.state = NotificationState::Hidden;
        true
    }
}

#[cfg(target_arch = "wasm32")]
mod timers {
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) {
        gloo_timers::callback::Timeout::new(delay_ms, callback).forget();
    }
}

/// Host builds have no event loop: timers are queued and only fire when a
/// test drains them.
#[cfg(not(target_arch = "wasm32"))]
mod timers {
    use std::cell::RefCell;

    pub type PendingTimer = (u32, Box<dyn FnOnce()>);

    thread_local! {
        static PENDING: RefCell<Vec<PendingTimer>> = RefCell::new(Vec::new());
    }

    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) {
        PENDING.with(|pending| pending.borrow_mut().push((delay_ms, Box::new(callback))));
    }

    #[cfg(test)]
    pub fn take_pending() -> Vec<PendingTimer> {
        PENDING.with(|pending| pending.borrow_mut().drain(..).collect())
    }
}

#[derive(Clone, Copy)]
pub struct NotificationCenter {
    machine: RwSignal<NotificationMachine>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            machine: create_rw_signal(NotificationMachine::default()),
        }
    }

    pub fn state(&self) -> Signal<NotificationState> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.state().clone()))
    }

    pub fn report(&self, outcome: ProcessOutcome) {
        let next = NotificationState::from(outcome);
        if !next.is_visible() {
            return;
        }
        let Some(generation) = self.machine.try_update(|m| m.show(next)).flatten() else {
            return;
        };
        log::debug!("notification #{} shown", generation);
        let center = *self;
        timers::schedule(NOTIFICATION_AUTO_HIDE_MS, move || center.expire(generation));
    }

    pub fn dismiss(&self) {
        self.machine.update(NotificationMachine::dismiss);
    }

    pub fn expire(&self, generation: u64) {
        // The owning scope may already be gone when a timer fires late.
        let _ = self.machine.try_update(|m| {
            if m.expire(generation) {
                log::debug!("notification #{} expired", generation);
            }
        });
    }

    pub fn reporter(&self) -> Callback<ProcessOutcome> {
        let center = *self;
        Callback::new(move |outcome: ProcessOutcome| center.report(outcome))
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
