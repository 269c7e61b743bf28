mod app;
mod catalog;
mod components;
mod deck;
mod decisions;
mod gesture;
mod pages;
mod session;
mod store;

use app::App;

fn main() {
    register_service_worker();
    leptos::mount::mount_to_body(App);
}

/// Register the static-asset cache worker. Purely an availability feature;
/// the app does not depend on it.
fn register_service_worker() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let registration = window.navigator().service_worker().register("sw.js");
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = wasm_bindgen_futures::JsFuture::from(registration).await {
            web_sys::console::warn_1(&e);
        }
    });
}
