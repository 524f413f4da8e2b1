use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10_000;
pub const DEFAULT_RECOGNITION_DELAY_MS: u32 = 3_000;
pub const DEFAULT_REGISTRATION_DELAY_MS: u32 = 2_000;
pub const CAMERA_WARM_UP_MS: u32 = 1_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
    #[serde(default)]
    pub poll_interval_ms: Option<u32>,
    #[serde(default)]
    pub recognition_delay_ms: Option<u32>,
    #[serde(default)]
    pub registration_delay_ms: Option<u32>,
}

/// Timings the pages read after startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub poll_interval_ms: u32,
    pub recognition_delay_ms: u32,
    pub registration_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            recognition_delay_ms: DEFAULT_RECOGNITION_DELAY_MS,
            registration_delay_ms: DEFAULT_REGISTRATION_DELAY_MS,
        }
    }
}

impl Timings {
    fn from_config(cfg: &RuntimeConfig) -> Self {
        let defaults = Self::default();
        Self {
            poll_interval_ms: cfg
                .poll_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.poll_interval_ms),
            recognition_delay_ms: cfg
                .recognition_delay_ms
                .unwrap_or(defaults.recognition_delay_ms),
            registration_delay_ms: cfg
                .registration_delay_ms
                .unwrap_or(defaults.registration_delay_ms),
        }
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIMINGS: OnceLock<Timings> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__FACEATTEND_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__FACEATTEND_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    match resp.json::<RuntimeConfig>().await {
        Ok(cfg) => Some(cfg),
        Err(err) => {
            log::warn!("Ignoring malformed config.json: {}", err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = get_from_env_js() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        let _ = TIMINGS.set(Timings::from_config(&cfg));
        if let Some(url) = cfg.api_base_url.filter(|u| !u.trim().is_empty()) {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub fn timings() -> Timings {
    TIMINGS.get().copied().unwrap_or_default()
}

/// Resolves the base URL and the timings. Pages read `timings()` when they
/// mount, so this must finish before the app is mounted.
pub async fn init() {
    let base = await_api_base_url().await;
    if TIMINGS.get().is_none() {
        let timings = fetch_runtime_config()
            .await
            .map(|cfg| Timings::from_config(&cfg))
            .unwrap_or_default();
        let _ = TIMINGS.set(timings);
    }
    log::info!("API base URL: {}", base);
}
