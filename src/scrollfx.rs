//! Scroll-position chrome: header shadow, reading-progress bar and the
//! back-to-top button.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::constants::{BACK_TO_TOP_THRESHOLD, HEADER_SCROLL_THRESHOLD};
use crate::dom_utils;

/// Percentage of the scrollable range covered by `scroll_y`, for the
/// progress bar width.  A page shorter than the viewport has no scrollable
/// range and reports 0 instead of dividing by zero.
pub fn progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 {
        0.0
    } else {
        scroll_y / total * 100.0
    }
}

pub fn setup_scroll_effects(document: &Document) -> Result<(), JsValue> {
    let header = document.get_element_by_id("header");
    let progress = document
        .get_element_by_id("scroll-progress")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let back_to_top = document.get_element_by_id("back-to-top");

    if header.is_none() && progress.is_none() && back_to_top.is_none() {
        return Ok(());
    }

    let window = web_sys::window().expect("no global `window` exists");

    {
        let header = header.clone();
        let back_to_top = back_to_top.clone();
        let on_scroll = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let window = match web_sys::window() {
                Some(w) => w,
                None => return,
            };
            let scroll_y = window.scroll_y().unwrap_or(0.0);

            if let Some(header) = &header {
                dom_utils::set_class_if(header, "scrolled", scroll_y > HEADER_SCROLL_THRESHOLD);
            }

            if let Some(progress) = &progress {
                let scroll_height = window
                    .document()
                    .and_then(|d| d.document_element())
                    .map(|root| root.scroll_height() as f64)
                    .unwrap_or(0.0);
                let viewport_height = window
                    .inner_height()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0);
                let percent = progress_percent(scroll_y, scroll_height, viewport_height);
                let _ = progress.style().set_property("width", &format!("{}%", percent));
            }

            if let Some(btn) = &back_to_top {
                dom_utils::set_class_if(btn, "visible", scroll_y > BACK_TO_TOP_THRESHOLD);
            }
        }));
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
        on_scroll.forget();
    }

    if let Some(btn) = back_to_top {
        let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_: MouseEvent| {
            if let Some(window) = web_sys::window() {
                dom_utils::smooth_scroll_to(&window, 0.0);
            }
        }));
        btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}
