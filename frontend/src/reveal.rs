use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEvent {
    Intersection { intersecting: bool },
    ObserverUnavailable,
}

impl RevealState {
    /// Hidden flips to visible on the first intersection and never flips back.
    pub fn on(self, event: RevealEvent) -> Self {
        match (self, event) {
            (RevealState::Visible, _) => RevealState::Visible,
            (RevealState::Hidden, RevealEvent::Intersection { intersecting: true }) => RevealState::Visible,
            (RevealState::Hidden, RevealEvent::Intersection { intersecting: false }) => RevealState::Hidden,
            (RevealState::Hidden, RevealEvent::ObserverUnavailable) => RevealState::Visible,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Visible => "reveal-visible",
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealEvent;

    fn reduce(self: Rc<Self>, action: RevealEvent) -> Rc<Self> {
        let next = self.on(action);
        if next == *self {
            self
        } else {
            debug!("Content block revealed");
            Rc::new(next)
        }
    }
}

/// Delay only shifts the CSS transition; the state itself flips immediately.
pub fn transition_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

/// Watches one element and reports intersection changes until the first hit.
pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealWatcher {
    /// `None` when the browser has no IntersectionObserver.
    pub fn observe<F>(element: &Element, on_event: F) -> Option<Self>
    where
        F: Fn(RevealEvent) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            on_event(RevealEvent::Intersection { intersecting });
            if intersecting {
                observer.disconnect();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Why a block skipped the observer and was shown straight away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealFallback {
    NoElement,
    NoObserver,
}

impl RevealFallback {
    fn reason(self) -> &'static str {
        match self {
            RevealFallback::NoElement => "Reveal block has no mounted element",
            RevealFallback::NoObserver => "IntersectionObserver unavailable",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reducer_eq(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = reveal.dispatcher();
        use_effect_with_deps(
            move |_| {
                let watcher = match node.cast::<Element>() {
                    Some(element) => {
                        let on_event = dispatcher.clone();
                        RevealWatcher::observe(&element, move |event| on_event.dispatch(event))
                            .ok_or(RevealFallback::NoObserver)
                    }
                    None => Err(RevealFallback::NoElement),
                };
                let watcher = watcher
                    .map_err(|fallback| {
                        warn!("{}, showing content immediately", fallback.reason());
                        dispatcher.dispatch(RevealEvent::ObserverUnavailable);
                    })
                    .ok();
                move || drop(watcher)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", reveal.class(), props.class.clone())}
            style={transition_style(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intersection(intersecting: bool) -> RevealEvent {
        RevealEvent::Intersection { intersecting }
    }

    #[test]
    fn first_intersection_reveals() {
        assert_eq!(RevealState::Hidden.on(intersection(false)), RevealState::Hidden);
        assert_eq!(RevealState::Hidden.on(intersection(true)), RevealState::Visible);
    }

    #[test]
    fn reveal_is_monotonic() {
        let events = [
            intersection(true),
            intersection(false),
            RevealEvent::ObserverUnavailable,
            intersection(false),
            intersection(true),
        ];
        let mut state = Rc::new(RevealState::Hidden);
        let mut seen_visible = false;
        for event in events {
            state = state.reduce(event);
            if seen_visible {
                assert_eq!(*state, RevealState::Visible);
            }
            seen_visible |= *state == RevealState::Visible;
        }
        assert!(seen_visible);
    }

    #[test]
    fn repeated_triggers_are_no_ops() {
        let visible = Rc::new(RevealState::Visible);
        let after = visible.clone().reduce(intersection(true));
        assert!(Rc::ptr_eq(&visible, &after));
    }

    #[test]
    fn missing_observer_degrades_to_visible() {
        assert_eq!(RevealState::Hidden.on(RevealEvent::ObserverUnavailable), RevealState::Visible);
    }

    #[test]
    fn delay_only_affects_style() {
        assert_eq!(transition_style(0), "transition-delay: 0ms;");
        assert_eq!(transition_style(200), "transition-delay: 200ms;");
        assert_eq!(RevealState::Visible.class(), "reveal-visible");
    }

    #[test]
    fn fallback_reasons_name_their_cause() {
        assert_eq!(RevealFallback::NoElement.reason(), "Reveal block has no mounted element");
        assert_eq!(RevealFallback::NoObserver.reason(), "IntersectionObserver unavailable");
        assert_ne!(RevealFallback::NoElement.reason(), RevealFallback::NoObserver.reason());
    }
}
