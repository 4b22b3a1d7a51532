pub mod api;
pub mod components;
pub mod config;
pub mod controllers;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(test)]
mod test_support;

pub const MOUNT_POINT_ID: &str = "app";

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting Hospedaje frontend (wasm)");

    // window.__HOSPEDAJE_ENV (env.js) wins over ./config.json.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialized");
    });

    match utils::dom::mount_point(MOUNT_POINT_ID) {
        Ok(root) => leptos::mount_to(root, router::app_root),
        Err(err) => {
            log::error!("{err}; mounting on <body> instead");
            leptos::mount_to_body(router::app_root);
        }
    }
}
