use wasm_bindgen::prelude::*;

pub mod auth;
pub mod bridge;
pub mod constants;
pub mod dom_utils;
pub mod form;
pub mod loading;
pub mod models;
pub mod pages;
pub mod state;
pub mod theme;


// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    // Pick the host bridge (Telegram container or standalone stand-in) and
    // apply its theme before any handler can fire.
    let bridge = bridge::init();
    theme::apply(&document, &bridge);

    auth::bind(&document, &bridge)?;
    pages::bind(&document)?;
    form::bind(&document, &bridge)?;
    form::bind_focus_decoration(&document)?;

    Ok(())
}
