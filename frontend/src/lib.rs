pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log_level()) {
        web_sys::console::warn_1(&format!("Logger already initialised: {}", err).into());
    }
    log::info!("Starting FaceAttend frontend");

    // window.__FACEATTEND_ENV, then ./config.json, then the built-in default.
    leptos::spawn_local(async move {
        config::init().await;
        log::debug!("Runtime config initialized");
        router::mount_app();
    });
}
