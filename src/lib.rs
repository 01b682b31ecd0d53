#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod css;
mod dom;
mod timer;
mod view;

pub use view::{mount_all, LinkWaveView};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("linkwave-web starting");
    Ok(())
}
