//! ==============================================================================
//! lib.rs - Auto Trading Tracker Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm host for the trading tracker header bar. reads the header
//!     configuration from the page and mounts the rendered header.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - header tree built by the `shared` crate, mapped to leptos views here
//!     - tracing events go to the browser console via tracing-wasm
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod components;
mod config;

use components::HeaderBar;

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let config = config::load_header_config();
    let page_title = shared::resolved_title(&config).to_string();

    view! {
        <Title text=page_title />
        <HeaderBar config=config />
    }
}
