#![allow(non_snake_case)]

use dioxus::prelude::*;

// Modules
mod components;
mod routes;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        // Debug lines from component renders stay hidden at INFO
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting profile card app");

    // Launch the Dioxus web app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        Router::<routes::Route> {}
    }
}
