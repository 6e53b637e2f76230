//! Navigation glue: mobile menu toggle, smooth anchor scrolling and the
//! scroll-position-driven highlight of the current nav link.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::constants::{ANCHOR_SCROLL_OFFSET, NAV_PROBE_OFFSET};
use crate::dom_utils;

// ---------------------------------------------------------------------------
// Mobile menu
// ---------------------------------------------------------------------------

/// `#mobile-menu` hamburger toggles itself and `#nav-list`; following any
/// nav link closes the menu again.
pub fn setup_mobile_menu(document: &Document) -> Result<(), JsValue> {
    let toggle = match document.get_element_by_id("mobile-menu") {
        Some(el) => el,
        None => return Ok(()),
    };
    let nav_list = match document.get_element_by_id("nav-list") {
        Some(el) => el,
        None => return Ok(()),
    };

    {
        let toggle_el = toggle.clone();
        let list_el = nav_list.clone();
        let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_: MouseEvent| {
            let _ = list_el.class_list().toggle("active");
            let _ = toggle_el.class_list().toggle("active");
        }));
        toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    dom_utils::for_each_selected(document, ".nav-link", |link| {
        let toggle_el = toggle.clone();
        let list_el = nav_list.clone();
        let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_: MouseEvent| {
            dom_utils::remove_class(&list_el, "active");
            dom_utils::remove_class(&toggle_el, "active");
        }));
        let _ = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    })?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Smooth scroll
// ---------------------------------------------------------------------------

/// Intercept every same-page anchor and glide to its target, offset so the
/// fixed header doesn't cover the heading.
pub fn setup_smooth_scroll(document: &Document) -> Result<(), JsValue> {
    dom_utils::for_each_selected(document, "a[href^='#']", |anchor| {
        let link = anchor.clone();
        let on_click = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                scroll_to_fragment(&href);
            }
        }));
        let _ = anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    })?;

    Ok(())
}

fn scroll_to_fragment(fragment: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };

    // The href doubles as a selector ("#about"); a dangling anchor is a no-op.
    let target: Element = match document.query_selector(fragment) {
        Ok(Some(el)) => el,
        _ => return,
    };

    let page_offset = window.page_y_offset().unwrap_or(0.0);
    let top = target.get_bounding_client_rect().top() + page_offset - ANCHOR_SCROLL_OFFSET;
    dom_utils::smooth_scroll_to(&window, top);
}

// ---------------------------------------------------------------------------
// Active link highlight
// ---------------------------------------------------------------------------

/// Pick the section containing `probe` (document-space y).  Spans are
/// `(top, height)`; the top edge is inclusive, the bottom exclusive.
pub fn active_section(probe: f64, spans: &[(f64, f64)]) -> Option<usize> {
    spans
        .iter()
        .position(|&(top, height)| probe >= top && probe < top + height)
}

/// On every scroll, mark the nav link of the section under the probe line.
pub fn setup_active_link_highlight(document: &Document) -> Result<(), JsValue> {
    // Nothing to highlight on pages without a nav.
    if document.query_selector(".nav-link")?.is_none() {
        return Ok(());
    }

    let window = web_sys::window().expect("no global `window` exists");

    let on_scroll = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let document = match window.document() {
            Some(d) => d,
            None => return,
        };
        let probe = window.scroll_y().unwrap_or(0.0) + NAV_PROBE_OFFSET;

        // Sections are re-measured on every event: layout may have changed
        // and the handler is cheap at page scale.
        let mut sections: Vec<(String, f64, f64)> = Vec::new();
        let _ = dom_utils::for_each_selected(&document, "section[id]", |el| {
            let id = el.get_attribute("id");
            if let (Some(id), Ok(html)) = (id, el.dyn_into::<web_sys::HtmlElement>()) {
                sections.push((id, html.offset_top() as f64, html.offset_height() as f64));
            }
        });

        let spans: Vec<(f64, f64)> = sections.iter().map(|s| (s.1, s.2)).collect();
        if let Some(idx) = active_section(probe, &spans) {
            let active_id = sections[idx].0.clone();
            let _ = dom_utils::for_each_selected(&document, ".nav-link", |link| {
                dom_utils::remove_class(&link, "active");
            });
            let selector = format!(".nav-link[data-section='{}']", active_id);
            if let Ok(Some(link)) = document.query_selector(&selector) {
                dom_utils::add_class(&link, "active");
            }
        }
    }));

    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();

    Ok(())
}
