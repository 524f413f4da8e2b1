pub mod media;
pub mod storage;
pub mod time;
pub mod timers;

/// Full-page navigation, the way every page leaves a view after a
/// completed action. No-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, err);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} skipped outside the browser", path);
    }
}

pub fn current_path() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
