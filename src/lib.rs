// lib.rs - Root module for the movie_zone library
//
// The web_app module holds the whole application; fixtures holds canned
// OMDb payloads shared by the test suites.

pub mod fixtures;
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrate the server-rendered page
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
