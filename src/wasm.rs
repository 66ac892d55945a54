//! Browser entry point.

use wasm_bindgen::prelude::*;

/// Mount the upload form controller onto the host page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("no document object, controller not mounted");
        return;
    };
    crate::dom::wire(&document);
}
