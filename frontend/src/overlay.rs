use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::content::ServiceDescriptor;

pub const POPUP_SHOW_DELAY_MS: u32 = 4000;
pub const POPUP_FADE_MS: u32 = 700;

/// Lifecycle of the promotional popup. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum PopupPhase {
    #[default]
    NotYetShown,
    Shown,
    /// Dismissed, still fading out.
    Dismissing,
    /// Dismissed and removed from the page.
    Dismissed,
}

impl PopupPhase {
    pub fn is_mounted(self) -> bool {
        matches!(self, PopupPhase::Shown | PopupPhase::Dismissing)
    }

    pub fn is_dismissed(self) -> bool {
        matches!(self, PopupPhase::Dismissing | PopupPhase::Dismissed)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayState {
    pub menu_open: bool,
    pub active_service: Option<ServiceDescriptor>,
    pub popup: PopupPhase,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayAction {
    ToggleMenu,
    NavLinkSelected,
    OpenService(ServiceDescriptor),
    CloseService,
    ShowPopup,
    DismissPopup,
    RemovePopup,
}

impl OverlayState {
    /// Total transition function. Actions that do not apply leave the state as is.
    pub fn apply(&self, action: OverlayAction) -> Self {
        let mut next = self.clone();
        match action {
            OverlayAction::ToggleMenu => next.menu_open = !self.menu_open,
            OverlayAction::NavLinkSelected => next.menu_open = false,
            OverlayAction::OpenService(service) => next.active_service = Some(service),
            OverlayAction::CloseService => next.active_service = None,
            OverlayAction::ShowPopup => {
                if self.popup == PopupPhase::NotYetShown {
                    next.popup = PopupPhase::Shown;
                }
            }
            OverlayAction::DismissPopup => {
                if self.popup == PopupPhase::Shown {
                    next.popup = PopupPhase::Dismissing;
                }
            }
            OverlayAction::RemovePopup => {
                if self.popup == PopupPhase::Dismissing {
                    next.popup = PopupPhase::Dismissed;
                }
            }
        }
        next
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!("Overlay action {:?}", action);
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;

    fn all_actions() -> Vec<OverlayAction> {
        vec![
            OverlayAction::ToggleMenu,
            OverlayAction::NavLinkSelected,
            OverlayAction::OpenService(SERVICES[0]),
            OverlayAction::OpenService(SERVICES[1]),
            OverlayAction::CloseService,
            OverlayAction::ShowPopup,
            OverlayAction::DismissPopup,
            OverlayAction::RemovePopup,
        ]
    }

    fn run(actions: &[OverlayAction]) -> Vec<OverlayState> {
        let mut state = Rc::new(OverlayState::default());
        let mut trace = vec![(*state).clone()];
        for action in actions {
            state = state.reduce(action.clone());
            trace.push((*state).clone());
        }
        trace
    }

    #[test]
    fn menu_toggles_and_closes_on_navigation() {
        let open = OverlayState::default().apply(OverlayAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.apply(OverlayAction::ToggleMenu).menu_open);

        let navigated = open.apply(OverlayAction::NavLinkSelected);
        assert!(!navigated.menu_open);
        assert!(!OverlayState::default().apply(OverlayAction::NavLinkSelected).menu_open);
    }

    #[test]
    fn opening_another_service_replaces_the_shown_one() {
        let showing_a = OverlayState::default().apply(OverlayAction::OpenService(SERVICES[0]));
        let showing_b = showing_a.apply(OverlayAction::OpenService(SERVICES[2]));
        assert_eq!(showing_b.active_service, Some(SERVICES[2]));

        let closed = showing_b.apply(OverlayAction::CloseService);
        assert_eq!(closed.active_service, None);
    }

    #[test]
    fn popup_walks_forward_only() {
        let trace = run(&[
            OverlayAction::DismissPopup,
            OverlayAction::RemovePopup,
            OverlayAction::ShowPopup,
            OverlayAction::ShowPopup,
            OverlayAction::DismissPopup,
            OverlayAction::ShowPopup,
            OverlayAction::RemovePopup,
            OverlayAction::ShowPopup,
        ]);
        let phases: Vec<_> = trace.iter().map(|s| s.popup).collect();
        assert_eq!(
            phases,
            [
                PopupPhase::NotYetShown,
                PopupPhase::NotYetShown,
                PopupPhase::NotYetShown,
                PopupPhase::Shown,
                PopupPhase::Shown,
                PopupPhase::Dismissing,
                PopupPhase::Dismissing,
                PopupPhase::Dismissed,
                PopupPhase::Dismissed,
            ]
        );
    }

    #[test]
    fn popup_lifecycle_holds_for_every_short_sequence() {
        let actions = all_actions();
        let n = actions.len();
        for code in 0..n.pow(4) {
            let sequence: Vec<_> = (0..4)
                .map(|digit| actions[(code / n.pow(digit)) % n].clone())
                .collect();
            let trace = run(&sequence);

            for (pair, action) in trace.windows(2).zip(&sequence) {
                let (before, after) = (pair[0].popup, pair[1].popup);
                assert!(after >= before, "popup moved backwards on {:?}", action);
                if before != after {
                    assert_eq!(after as u8, before as u8 + 1, "popup skipped a phase");
                }
                if after == PopupPhase::Shown && before != PopupPhase::Shown {
                    assert_eq!(*action, OverlayAction::ShowPopup);
                }
            }
        }
    }

    #[test]
    fn sub_machines_do_not_interact() {
        let state = OverlayState {
            menu_open: true,
            active_service: Some(SERVICES[1]),
            popup: PopupPhase::Shown,
        };
        let dismissed = state.apply(OverlayAction::DismissPopup);
        assert!(dismissed.menu_open);
        assert_eq!(dismissed.active_service, Some(SERVICES[1]));

        let closed = state.apply(OverlayAction::CloseService);
        assert!(closed.menu_open);
        assert_eq!(closed.popup, PopupPhase::Shown);
    }

    #[test]
    fn no_op_actions_keep_the_same_allocation() {
        let state = Rc::new(OverlayState::default());
        let next = state.clone().reduce(OverlayAction::RemovePopup);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
