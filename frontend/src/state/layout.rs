use crate::{config::MOBILE_BREAKPOINT_PX, utils::viewport};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerVariant {
    /// Overlay with a backdrop, used on narrow viewports.
    Temporary,
    /// Pushes the content aside.
    Persistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub drawer_open: bool,
    pub is_mobile: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            drawer_open: true,
            is_mobile: false,
        }
    }
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

impl LayoutState {
    /// Initial layout for a viewport; an unknown width is treated as desktop.
    pub fn for_width(width: Option<f64>) -> Self {
        let mut state = Self::default();
        if let Some(width) = width {
            state.observe_width(width);
        }
        state
    }

    /// Narrow viewports force the drawer closed. Widening only clears the
    /// mobile flag; the drawer stays as the user left it.
    pub fn observe_width(&mut self, width: f64) {
        if is_mobile_width(width) {
            self.is_mobile = true;
            self.drawer_open = false;
        } else {
            self.is_mobile = false;
        }
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn drawer_variant(&self) -> DrawerVariant {
        if self.is_mobile {
            DrawerVariant::Temporary
        } else {
            DrawerVariant::Persistent
        }
    }

    /// Whether the main content is shifted right by the drawer.
    pub fn content_shifted(&self) -> bool {
        self.drawer_open && !self.is_mobile
    }
}

/// Layout signal owned by the dashboard shell.
///
/// The window `resize` listener is attached when this is created and removed
/// when the owning reactive scope is disposed.
pub fn use_responsive_layout() -> RwSignal<LayoutState> {
    let layout = create_rw_signal(LayoutState::for_width(viewport::inner_width()));

    let handle = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport::inner_width() {
            layout.update(|state| state.observe_width(width));
        }
    });
    on_cleanup(move || handle.remove());

    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_defaults_follow_breakpoint() {
        let desktop = LayoutState::for_width(Some(1024.0));
        assert!(desktop.drawer_open);
        assert!(!desktop.is_mobile);

        let edge = LayoutState::for_width(Some(600.0));
        assert!(edge.drawer_open);
        assert!(!edge.is_mobile);

        let phone = LayoutState::for_width(Some(599.0));
        assert!(!phone.drawer_open);
        assert!(phone.is_mobile);

        assert_eq!(LayoutState::for_width(None), LayoutState::default());
    }

    #[test]
    fn shrinking_forces_drawer_closed() {
        let mut state = LayoutState::for_width(Some(1200.0));
        state.observe_width(480.0);
        assert!(state.is_mobile);
        assert!(!state.drawer_open);
        assert_eq!(state.drawer_variant(), DrawerVariant::Temporary);
    }

    #[test]
    fn widening_clears_mobile_but_keeps_drawer_closed() {
        let mut state = LayoutState::for_width(Some(480.0));
        state.observe_width(900.0);
        assert!(!state.is_mobile);
        assert!(!state.drawer_open);
        assert_eq!(state.drawer_variant(), DrawerVariant::Persistent);
    }

    #[test]
    fn explicit_actions_toggle_drawer() {
        let mut state = LayoutState::for_width(Some(480.0));
        state.open_drawer();
        assert!(state.drawer_open);
        assert!(!state.content_shifted());

        state.observe_width(480.0);
        assert!(!state.drawer_open);

        let mut desktop = LayoutState::default();
        assert!(desktop.content_shifted());
        desktop.close_drawer();
        assert!(!desktop.content_shifted());
    }
}
