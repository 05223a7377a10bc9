pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;
use crate::shared::config::{install_api_config, load_config};

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        let config = load_config().await;
        install_api_config(config.api.clone());

        leptos::mount::mount_to_body(move || view! { <App config=config /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
