#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod interaction;
pub mod projects;
#[cfg(feature = "ssr")]
pub mod server;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
