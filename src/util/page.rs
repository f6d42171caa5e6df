//! Page lifecycle bindings for server-rendered markup.
//!
//! DESIGN
//! ======
//! No implicit global event wiring: each behavior is an explicit init
//! function taking the relevant element collection, and `init_page` does
//! the one document scan on mount.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::time::Duration;

/// Alert banners are removed this long after page readiness.
pub const ALERT_DISMISS_DELAY: Duration = Duration::from_secs(5);

/// Style class marking dismissible alert banners.
pub const ALERT_SELECTOR: &str = ".alert";

/// Attribute holding a raw date string for formatted rendering.
pub const DATE_ATTRIBUTE: &str = "data-date";

/// Attribute holding a confirmation prompt for a guarded action.
pub const CONFIRM_ATTRIBUTE: &str = "data-confirm";

/// Show a blocking confirmation dialog. Denies outside a browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Scan the document and wire all page-level bindings.
#[cfg(feature = "hydrate")]
pub fn init_page() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    auto_dismiss_alerts(&query_elements(&document, ALERT_SELECTOR));
    format_date_elements(&query_elements(&document, &format!("[{DATE_ATTRIBUTE}]")));
    bind_confirm_prompts(&query_elements(&document, &format!("[{CONFIRM_ATTRIBUTE}]")));
}

/// Schedule removal of each alert banner after [`ALERT_DISMISS_DELAY`].
#[cfg(feature = "hydrate")]
pub fn auto_dismiss_alerts(alerts: &[web_sys::Element]) {
    for alert in alerts {
        let alert = alert.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(ALERT_DISMISS_DELAY).await;
            alert.remove();
        });
    }
}

/// Replace each element's text with the formatted form of its
/// `data-date` attribute.
#[cfg(feature = "hydrate")]
pub fn format_date_elements(elements: &[web_sys::Element]) {
    for element in elements {
        let raw = element.get_attribute(DATE_ATTRIBUTE).unwrap_or_default();
        element.set_text_content(Some(&crate::util::datetime::format_date(&raw)));
    }
}

/// Gate each element's click on an affirmed confirmation dialog.
#[cfg(feature = "hydrate")]
pub fn bind_confirm_prompts(elements: &[web_sys::Element]) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::Closure;

    for element in elements {
        let Some(message) = element.get_attribute(CONFIRM_ATTRIBUTE) else {
            continue;
        };
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            if !confirm(&message) {
                event.prevent_default();
            }
        });
        if element
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .is_ok()
        {
            // The listener lives for the rest of the page.
            handler.forget();
        }
    }
}

#[cfg(feature = "hydrate")]
fn query_elements(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast as _;

    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::new();
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            elements.push(element);
        }
    }
    elements
}
