//! Notification banner lifecycle: manual dismissal and timed auto-hide.
//!
//! Each `.alert` element gets its own auto-dismiss timer unless it
//! carries the `permanent` class. The timer handle is retained so a
//! manual dismissal cancels the pending hide instead of leaving a stale
//! timeout behind.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

/// Milliseconds from page load until a non-permanent alert hides itself.
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Class exempting an alert from timed dismissal.
pub const PERMANENT_CLASS: &str = "permanent";

/// Whether an alert with the given `class` attribute value is subject to
/// automatic dismissal.
pub fn auto_dismisses(class_attr: &str) -> bool {
    !class_attr
        .split_whitespace()
        .any(|class| class == PERMANENT_CLASS)
}

/// Wire up every alert on the page: click handlers for `.alert-close`
/// controls and auto-dismiss timers for non-permanent alerts.
///
/// Zero matching elements attaches zero listeners; that is not an error.
#[cfg(feature = "browser")]
pub fn wire(document: &web_sys::Document) {
    use wasm_bindgen::JsCast;

    let Ok(alerts) = document.query_selector_all(".alert") else {
        return;
    };
    for i in 0..alerts.length() {
        let Some(node) = alerts.item(i) else { continue };
        let Ok(alert) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        wire_one(&alert);
    }
}

/// Wire a single alert container.
#[cfg(feature = "browser")]
fn wire_one(alert: &web_sys::Element) {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    // Shared slot for the pending timer. Manual dismissal takes the
    // handle out, which drops it and clears the timeout.
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    if auto_dismisses(&alert.get_attribute("class").unwrap_or_default()) {
        let el = alert.clone();
        let slot = Rc::clone(&pending);
        let timeout = Timeout::new(AUTO_DISMISS_MS, move || {
            hide(&el);
            // The timer fired; releasing its own handle is a no-op clear.
            drop(slot.borrow_mut().take());
        });
        *pending.borrow_mut() = Some(timeout);
    }

    let Ok(closes) = alert.query_selector_all(".alert-close") else {
        return;
    };
    for i in 0..closes.length() {
        let Some(button) = closes.item(i) else { continue };
        let el = alert.clone();
        let slot = Rc::clone(&pending);
        let on_click = Closure::<dyn FnMut()>::new(move || {
            hide(&el);
            drop(slot.borrow_mut().take());
        });
        let _ =
            button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        on_click.forget();
    }
}

/// Hide an element by setting `display: none`. Hiding an already-hidden
/// element is a no-op.
#[cfg(feature = "browser")]
fn hide(el: &web_sys::Element) {
    use wasm_bindgen::JsCast;

    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", "none");
    }
}
