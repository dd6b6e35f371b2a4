#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod carousel;
pub mod components;
pub mod dom;
pub mod modal;
pub mod nav;
pub mod panels;
pub mod paths;
pub mod storage;
pub mod styles;

/// Module initialisation: panic hook and console logging only.
///
/// The page itself is enhanced by [`run`], which the host page calls after
/// `init()`, so loading the module never opens a name prompt on its own.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        dom::console_error(&format!("logger already set: {err}"));
    }
}

/// Enhance the page once the document has been parsed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn run() {
    dom::on_ready(app::boot);
}
