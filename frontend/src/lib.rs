//! WebAssembly entry point for the Quiver site.

use quiver_core::Config;
use wasm_bindgen::prelude::wasm_bindgen;

/// Site configuration, embedded at compile time.
const CONFIG: &str = include_str!("../../quiver.toml");

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = match Config::from_toml_str(CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid site configuration: {e}");
            return;
        }
    };

    // Widgets stay mounted for the lifetime of the page.
    let app = quiver_app::start(config);
    std::mem::forget(app);
}
