use wasm_bindgen::prelude::*;

pub mod canvas;
pub mod components;
pub mod data;
pub mod state;
pub mod types;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    // A second init (hot reload) is harmless.
    let _ = console_log::init_with_level(level);
    log::info!("mousegram v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(components::app::App);
}
