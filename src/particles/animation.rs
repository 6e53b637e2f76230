//! The render loop driving the particle backdrop.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::field::ParticleField;
use super::surface::CanvasSurface;

/// Start the frame-synchronized loop: tick the field, then re-arm for the
/// next animation frame.  Runs for the lifetime of the page; there is no
/// stop handle because the host never tears the backdrop down.
pub fn start_render_loop(field: Rc<RefCell<ParticleField>>, surface: Rc<RefCell<CanvasSurface>>) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        {
            let mut field = field.borrow_mut();
            let mut surface = surface.borrow_mut();
            field.tick(&mut *surface);
        }

        // Re-arm for the next frame.  The closure lives in `f`, so this is
        // a scheduler loop, not call-stack recursion.
        web_sys::window()
            .expect("no global window")
            .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .expect("request_animation_frame failed");
    }) as Box<dyn FnMut()>));

    // First frame.
    web_sys::window()
        .expect("no global window")
        .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        .expect("request_animation_frame failed");
}
