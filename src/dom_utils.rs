//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, **ergonomic** wrappers for the class-toggle and query patterns the
//! page effects use everywhere, so we don't sprinkle raw `class_list()` /
//! `query_selector_all` plumbing across the code-base.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

/// Add a class to the element, ignoring the (unused) JS return value.
pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

/// Remove a class from the element.
pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Flip a class on or off depending on `on` – mirrors
/// `classList.toggle(cls, force)`.
pub fn set_class_if(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Run `f` over every element matching `selector`.
///
/// `query_selector_all` returns a `NodeList`; this walks it once and hands
/// each entry to the callback already cast to `Element`.
pub fn for_each_selected<F>(document: &Document, selector: &str, mut f: F) -> Result<(), JsValue>
where
    F: FnMut(Element),
{
    let nodes = document.query_selector_all(selector)?;
    for idx in 0..nodes.length() {
        if let Some(node) = nodes.get(idx) {
            if let Ok(el) = node.dyn_into::<Element>() {
                f(el);
            }
        }
    }
    Ok(())
}

/// Smooth-scroll the window to the given vertical offset.
pub fn smooth_scroll_to(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}
