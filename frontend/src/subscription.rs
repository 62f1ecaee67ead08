use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Returns `None` outside a browser or if registration fails.
    pub fn new<F>(event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        if window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not listen for {} events", event);
            return None;
        }
        debug!("Listening for {} events", event);
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            warn!("Could not stop listening for {} events", self.event);
            return;
        }
        debug!("Stopped listening for {} events", self.event);
    }
}

pub fn is_cancel_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_cancels() {
        assert!(is_cancel_key("Escape"));
        assert!(is_cancel_key("Esc"));
        assert!(!is_cancel_key("Enter"));
        assert!(!is_cancel_key("escape"));
    }
}
