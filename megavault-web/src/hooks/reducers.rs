//! `yew` reducer wrappers around the core state machines.

use megavault_core::{
    FieldValue, FormRecord, PaginationAction, PaginationState, RegisterStep, ScrollTracker,
    SidebarAction, SidebarState, WizardAction,
};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pager(pub PaginationState);

impl Reducible for Pager {
    type Action = PaginationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Offset sampled when the listener is attached.
    Mounted(f64),
    Scrolled(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState(pub ScrollTracker);

impl Reducible for ScrollState {
    type Action = ScrollEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ScrollEvent::Mounted(offset) => ScrollTracker::at(offset),
            ScrollEvent::Scrolled(offset) => self.0.observe(offset),
        };
        Rc::new(Self(next))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sidebar(pub SidebarState);

impl Reducible for Sidebar {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wizard(pub RegisterStep);

impl Reducible for Wizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

/// A form record updated one field at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState<F: FormRecord>(pub F);

impl<F: FormRecord> Reducible for FormState<F> {
    type Action = (String, FieldValue);

    fn reduce(self: Rc<Self>, (name, value): Self::Action) -> Rc<Self> {
        match self.0.clone().with_field(&name, value) {
            Ok(next) if next == self.0 => self,
            Ok(next) => Rc::new(Self(next)),
            Err(err) => {
                log::warn!("{err}");
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_reuses_state_for_ignored_requests() {
        let pager = Rc::new(Pager::default()).reduce(PaginationAction::ItemsLoaded(5));
        assert_eq!(pager.0.total_pages, 2);
        let same = Rc::clone(&pager).reduce(PaginationAction::RequestPage(9));
        assert!(Rc::ptr_eq(&pager, &same));
    }

    #[test]
    fn scroll_state_tracks_direction() {
        let state = Rc::new(ScrollState::default()).reduce(ScrollEvent::Mounted(40.0));
        assert!(!state.0.is_scrolling_down());
        let state = state.reduce(ScrollEvent::Scrolled(90.0));
        assert!(state.0.is_scrolling_down());
    }

    #[test]
    fn form_state_folds_fields_and_ignores_unknown_names() {
        use megavault_core::LoginForm;

        let form = Rc::new(FormState::<LoginForm>::default())
            .reduce(("usernameOrEmail".into(), FieldValue::from("jane")));
        assert_eq!(form.0.username_or_email, "jane");
        let same = Rc::clone(&form).reduce(("nope".into(), FieldValue::from("x")));
        assert!(Rc::ptr_eq(&form, &same));
    }

    #[test]
    fn wizard_and_sidebar_delegate_to_core() {
        let wizard = Rc::new(Wizard::default()).reduce(WizardAction::Next);
        assert_eq!(wizard.0, RegisterStep::Contact);
        let sidebar = Rc::new(Sidebar::default()).reduce(SidebarAction::Open);
        assert!(sidebar.0.is_open());
    }
}
