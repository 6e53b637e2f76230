use wasm_bindgen::prelude::*;

pub mod constants;
pub mod cursor;
pub mod dom_utils;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod scrollfx;
pub mod typewriter;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // The particle canvas is required; a missing element is a fatal setup
    // error the host page must prevent.
    particles::setup_particle_backdrop(&document)?;

    // Peripheral effects degrade gracefully: each one skips itself when its
    // DOM hooks are absent, and a wiring failure must not take down the rest
    // of the page.
    try_setup("custom cursor", cursor::setup_custom_cursor(&document));
    try_setup("mobile menu", nav::setup_mobile_menu(&document));
    try_setup("smooth scroll", nav::setup_smooth_scroll(&document));
    try_setup("nav highlight", nav::setup_active_link_highlight(&document));
    try_setup("scroll effects", scrollfx::setup_scroll_effects(&document));
    try_setup("scroll reveal", reveal::setup_scroll_reveal(&document));
    try_setup("skill bars", reveal::setup_skill_bars(&document));
    try_setup("typewriter", typewriter::setup_typewriter(&document));

    Ok(())
}

fn try_setup(name: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Failed to set up {}: {:?}", name, e).into());
    }
}
