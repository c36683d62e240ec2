#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod error;
mod tokens;
mod toggler;

pub use dom::{class_list_supported, detect_toggler, query_all, window_document};
pub use error::ClassError;
pub use toggler::{ClassElement, ClassToggler, Strategy};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("class-toggle starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let toggler = dom::detect_toggler(&document);

    // Strip the basic-list style from everything that carries it on load
    let styled = dom::query_all(&document, constants::STRIP_SELECTOR)?;
    toggler.remove(&styled, constants::STRIP_CLASS)?;
    Ok(())
}
