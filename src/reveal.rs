//! One-shot viewport-entry effects driven by `IntersectionObserver`:
//! reveal animations for `[data-animate]` elements and the skill-bar fill.
//! Every element is unobserved after its first intersection, so each effect
//! fires exactly once.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_FILL_THRESHOLD};
use crate::dom_utils;

pub fn setup_scroll_reveal(document: &Document) -> Result<(), JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let observer = observe_once(&options, |target| {
        dom_utils::add_class(target, "is-visible");
    })?;

    dom_utils::for_each_selected(document, "[data-animate]", |el| observer.observe(&el))?;
    Ok(())
}

pub fn setup_skill_bars(document: &Document) -> Result<(), JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(SKILL_FILL_THRESHOLD));

    let observer = observe_once(&options, |target| {
        // The target width travels on the element itself so the markup
        // stays the single source of truth for each skill level.
        if let Some(width) = target.get_attribute("data-width") {
            if let Some(html) = target.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("width", &width);
            }
        }
    })?;

    dom_utils::for_each_selected(document, ".skill-fill", |el| observer.observe(&el))?;
    Ok(())
}

/// Build an observer that runs `on_enter` for each intersecting entry and
/// then stops watching that element.
fn observe_once<F>(
    options: &IntersectionObserverInit,
    on_enter: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: Fn(&web_sys::Element) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_enter(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    callback.forget();
    Ok(observer)
}
