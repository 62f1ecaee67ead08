use gloo_timers::callback::Timeout;
use log::debug;
use yew::Callback;

use crate::overlay::{OverlayAction, POPUP_FADE_MS, POPUP_SHOW_DELAY_MS};

/// One-shot timer source. Dropping a handle cancels its task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Timers owned by the page for as long as it is mounted.
pub struct PageLifecycle<S: Scheduler = BrowserScheduler> {
    scheduler: S,
    popup_armed: bool,
    popup_show: Option<S::Handle>,
    popup_removal: Option<S::Handle>,
}

impl<S: Scheduler> PageLifecycle<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            popup_armed: false,
            popup_show: None,
            popup_removal: None,
        }
    }

    /// Schedules the popup to appear. Only the first call has an effect.
    pub fn arm_popup(&mut self, dispatch: Callback<OverlayAction>) {
        if self.popup_armed {
            return;
        }
        self.popup_armed = true;
        debug!("Popup armed, showing in {}ms", POPUP_SHOW_DELAY_MS);
        self.popup_show = Some(self.scheduler.schedule(
            POPUP_SHOW_DELAY_MS,
            Box::new(move || dispatch.emit(OverlayAction::ShowPopup)),
        ));
    }

    /// Removes the popup once its fade-out window has elapsed. The window is
    /// counted from the first call; later calls leave the pending removal alone.
    pub fn schedule_popup_removal(&mut self, dispatch: Callback<OverlayAction>) {
        if self.popup_removal.is_some() {
            return;
        }
        self.popup_removal = Some(self.scheduler.schedule(
            POPUP_FADE_MS,
            Box::new(move || dispatch.emit(OverlayAction::RemovePopup)),
        ));
    }

    pub fn teardown(&mut self) {
        if self.popup_show.take().is_some() | self.popup_removal.take().is_some() {
            debug!("Page timers cancelled");
        }
    }
}

impl<S: Scheduler> Drop for PageLifecycle<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Scheduler;

    struct Pending {
        due_ms: u64,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<RefCell<bool>>,
    }

    /// Scheduler driven by hand, for tests.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now_ms: Rc<RefCell<u64>>,
        pending: Rc<RefCell<Vec<Pending>>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<RefCell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            *self.cancelled.borrow_mut() = true;
        }
    }

    impl ManualScheduler {
        /// Moves the clock forward, running tasks that come due and were not cancelled.
        pub fn advance(&self, ms: u64) {
            let now = {
                let mut now = self.now_ms.borrow_mut();
                *now += ms;
                *now
            };
            let due: Vec<Box<dyn FnOnce()>> = self
                .pending
                .borrow_mut()
                .iter_mut()
                .filter(|p| p.due_ms <= now && !*p.cancelled.borrow())
                .filter_map(|p| p.task.take())
                .collect();
            for task in due {
                task();
            }
        }

        pub fn live_tasks(&self) -> usize {
            self.pending
                .borrow()
                .iter()
                .filter(|p| p.task.is_some() && !*p.cancelled.borrow())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(RefCell::new(false));
            self.pending.borrow_mut().push(Pending {
                due_ms: *self.now_ms.borrow() + u64::from(delay_ms),
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::testing::ManualScheduler;
    use super::*;
    use crate::overlay::{OverlayState, PopupPhase};

    fn page_state() -> (Rc<RefCell<OverlayState>>, Callback<OverlayAction>) {
        let state = Rc::new(RefCell::new(OverlayState::default()));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: OverlayAction| {
                let next = state.borrow().apply(action);
                *state.borrow_mut() = next;
            })
        };
        (state, dispatch)
    }

    #[test]
    fn popup_shows_after_delay() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch);

        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS) - 1);
        assert_eq!(state.borrow().popup, PopupPhase::NotYetShown);
        scheduler.advance(1);
        assert_eq!(state.borrow().popup, PopupPhase::Shown);
    }

    #[test]
    fn unmount_before_delay_mutates_nothing() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch);

        scheduler.advance(1000);
        drop(page);
        assert_eq!(scheduler.live_tasks(), 0);

        scheduler.advance(10_000);
        assert_eq!(*state.borrow(), OverlayState::default());
    }

    #[test]
    fn popup_is_armed_once() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch.clone());
        page.arm_popup(dispatch.clone());
        assert_eq!(scheduler.live_tasks(), 1);

        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS));
        dispatch.emit(OverlayAction::DismissPopup);
        page.schedule_popup_removal(dispatch.clone());
        scheduler.advance(u64::from(POPUP_FADE_MS));
        assert_eq!(state.borrow().popup, PopupPhase::Dismissed);

        page.arm_popup(dispatch);
        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS) * 2);
        assert_eq!(state.borrow().popup, PopupPhase::Dismissed);
    }

    #[test]
    fn removal_waits_for_the_whole_fade_window() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch.clone());
        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS));

        dispatch.emit(OverlayAction::DismissPopup);
        page.schedule_popup_removal(dispatch);
        assert_eq!(state.borrow().popup, PopupPhase::Dismissing);
        assert!(state.borrow().popup.is_mounted());

        scheduler.advance(u64::from(POPUP_FADE_MS) - 1);
        assert_eq!(state.borrow().popup, PopupPhase::Dismissing);
        scheduler.advance(1);
        assert_eq!(state.borrow().popup, PopupPhase::Dismissed);
        assert!(!state.borrow().popup.is_mounted());
    }

    #[test]
    fn repeated_dismiss_keeps_the_original_fade_deadline() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch.clone());
        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS));

        dispatch.emit(OverlayAction::DismissPopup);
        page.schedule_popup_removal(dispatch.clone());
        scheduler.advance(600);

        dispatch.emit(OverlayAction::DismissPopup);
        page.schedule_popup_removal(dispatch);
        assert_eq!(scheduler.live_tasks(), 1);

        scheduler.advance(u64::from(POPUP_FADE_MS) - 600);
        assert_eq!(state.borrow().popup, PopupPhase::Dismissed);
    }

    #[test]
    fn teardown_during_fade_cancels_removal() {
        let scheduler = ManualScheduler::default();
        let (state, dispatch) = page_state();
        let mut page = PageLifecycle::new(scheduler.clone());
        page.arm_popup(dispatch.clone());
        scheduler.advance(u64::from(POPUP_SHOW_DELAY_MS));
        dispatch.emit(OverlayAction::DismissPopup);
        page.schedule_popup_removal(dispatch);

        page.teardown();
        scheduler.advance(u64::from(POPUP_FADE_MS));
        assert_eq!(state.borrow().popup, PopupPhase::Dismissing);
    }
}
