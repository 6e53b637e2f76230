//! Animated particle backdrop rendered on a full-viewport canvas.
//!
//! The simulation itself (`Particle`, `ParticleField`) is plain Rust over the
//! [`Surface`] drawing seam so it can be unit-tested natively; only this
//! module touches the real DOM: it looks up the canvas, sizes it to the
//! window, wires the resize listener and starts the animation loop.

pub mod animation;
pub mod field;
pub mod particle;
pub mod surface;

pub use field::ParticleField;
pub use particle::Particle;
pub use surface::{CanvasSurface, Surface};

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::constants::PARTICLE_COUNT;

/// Attach the particle backdrop to `#particles-canvas`.
///
/// The canvas element is the one piece of required markup: without it there
/// is nothing to render onto, so a missing element is a hard error instead
/// of a silent skip.
pub fn setup_particle_backdrop(document: &Document) -> Result<(), JsValue> {
    let canvas = document
        .get_element_by_id("particles-canvas")
        .ok_or_else(|| JsValue::from_str("#particles-canvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;

    let window = web_sys::window().expect("no global `window` exists");
    let (width, height) = viewport_size(&window);

    let surface = CanvasSurface::new(canvas)?;
    surface.set_size(width as u32, height as u32);

    let mut rng = rand::thread_rng();
    let field = ParticleField::new(&mut rng, width, height, PARTICLE_COUNT);

    let field = Rc::new(RefCell::new(field));
    let surface = Rc::new(RefCell::new(surface));

    setup_viewport_binding(&window, field.clone(), surface.clone())?;
    animation::start_render_loop(field, surface);

    Ok(())
}

/// Re-size the canvas and the field bounds whenever the window changes.
///
/// Deliberately unthrottled – each invocation is cheap and independent.
/// Existing particles are never repositioned here; a shrink can leave them
/// outside the new bounds until the boundary check reflects them back in.
fn setup_viewport_binding(
    window: &Window,
    field: Rc<RefCell<ParticleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
) -> Result<(), JsValue> {
    let resize_callback = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        let window = web_sys::window().expect("no global `window` exists");
        let (width, height) = viewport_size(&window);
        surface.borrow().set_size(width as u32, height as u32);
        field.borrow_mut().resize(width, height);
    }));

    window.add_event_listener_with_callback("resize", resize_callback.as_ref().unchecked_ref())?;
    resize_callback.forget();

    Ok(())
}

fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}
