use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Height kept clear for the fixed navbar when scrolling to a section.
pub const HEADER_OFFSET: f64 = 100.0;
pub const SCROLLED_THRESHOLD: f64 = 50.0;

pub fn anchor_id(href: &str) -> &str {
    href.trim_start_matches('#')
}

pub fn scroll_offset(element_top: f64, page_y: f64) -> f64 {
    element_top + page_y - HEADER_OFFSET
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Smoothly scrolls to the element with id `anchor`. A missing target is a no-op.
pub fn scroll_to_section(anchor: &str) -> bool {
    let id = anchor_id(anchor);
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        warn!("No section with id {}", id);
        return false;
    };

    let top = scroll_offset(
        element.get_bounding_client_rect().top(),
        window.page_y_offset().unwrap_or(0.0),
    );
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    debug!("Scrolled to #{}", id);
    true
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_strips_hash() {
        assert_eq!(anchor_id("#contact"), "contact");
        assert_eq!(anchor_id("contact"), "contact");
    }

    #[test]
    fn offset_accounts_for_fixed_header() {
        assert_eq!(scroll_offset(250.0, 1000.0), 1150.0);
        assert_eq!(scroll_offset(0.0, 0.0), -100.0);
    }

    #[test]
    fn navbar_compacts_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }
}
