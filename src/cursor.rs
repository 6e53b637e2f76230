//! Custom cursor – a dot glued to the pointer plus an outline that trails
//! one animation frame behind it.  Desktop-only; small viewports keep the
//! native cursor.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::constants::{
    CURSOR_HOVER_TARGETS, CURSOR_MIN_VIEWPORT, CURSOR_OUTLINE_BORDER,
    CURSOR_OUTLINE_BORDER_HOVER, CURSOR_OUTLINE_SIZE, CURSOR_OUTLINE_SIZE_HOVER,
};
use crate::dom_utils;

pub fn setup_custom_cursor(document: &Document) -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global `window` exists");
    let viewport_width = window
        .inner_width()?
        .as_f64()
        .unwrap_or(0.0);
    if viewport_width <= CURSOR_MIN_VIEWPORT {
        return Ok(());
    }

    let dot = match document.get_element_by_id("cursor-dot") {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };
    let outline = match document.get_element_by_id("cursor-outline") {
        Some(el) => el.dyn_into::<HtmlElement>()?,
        None => return Ok(()),
    };

    setup_pointer_tracking(document, dot, outline.clone())?;
    setup_hover_growth(document, outline)?;

    Ok(())
}

/// The dot snaps to every mousemove; the outline is repositioned from a
/// one-shot animation-frame callback so it lags visibly behind.
fn setup_pointer_tracking(
    document: &Document,
    dot: HtmlElement,
    outline: HtmlElement,
) -> Result<(), JsValue> {
    let on_move = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
        let x = event.client_x();
        let y = event.client_y();

        let _ = dot.style().set_property("left", &format!("{}px", x));
        let _ = dot.style().set_property("top", &format!("{}px", y));

        let outline = outline.clone();
        let follow = Closure::once_into_js(move || {
            let _ = outline.style().set_property("left", &format!("{}px", x));
            let _ = outline.style().set_property("top", &format!("{}px", y));
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(follow.as_ref().unchecked_ref());
        }
    }));

    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    Ok(())
}

/// Enlarge the outline while hovering interactive elements.
fn setup_hover_growth(document: &Document, outline: HtmlElement) -> Result<(), JsValue> {
    dom_utils::for_each_selected(document, CURSOR_HOVER_TARGETS, |el| {
        let grow_outline = outline.clone();
        let enter = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_: MouseEvent| {
            let style = grow_outline.style();
            let _ = style.set_property("width", CURSOR_OUTLINE_SIZE_HOVER);
            let _ = style.set_property("height", CURSOR_OUTLINE_SIZE_HOVER);
            let _ = style.set_property("border-color", CURSOR_OUTLINE_BORDER_HOVER);
        }));
        let _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let shrink_outline = outline.clone();
        let leave = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_: MouseEvent| {
            let style = shrink_outline.style();
            let _ = style.set_property("width", CURSOR_OUTLINE_SIZE);
            let _ = style.set_property("height", CURSOR_OUTLINE_SIZE);
            let _ = style.set_property("border-color", CURSOR_OUTLINE_BORDER);
        }));
        let _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    })?;

    Ok(())
}
