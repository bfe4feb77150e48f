pub mod app;
pub mod components;
pub mod error;
pub mod i18n;
pub mod nav;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
