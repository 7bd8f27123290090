use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://cars-zone.herokuapp.com";

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 600.0;
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 4000;
pub const HOME_CATALOG_LIMIT: u32 = 6;
pub const DRAWER_WIDTH_PX: u32 = 240;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod globals {
    use super::RuntimeConfig;

    fn read_string(object: &wasm_bindgen::JsValue, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(object, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    fn read_global(name: &str, keys: &[&str]) -> Option<String> {
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        read_string(&any, keys)
    }

    // window.__CARZONE_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__CARZONE_CONFIG = { api_base_url: "..." }.
    pub fn snapshot() -> Option<String> {
        read_global("__CARZONE_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__CARZONE_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }

    pub fn write(cfg: &RuntimeConfig) {
        let (Some(url), Some(window)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&window, &"__CARZONE_CONFIG".into(), &obj);
    }

    pub async fn fetch() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod globals {
    use super::RuntimeConfig;

    pub fn snapshot() -> Option<String> {
        None
    }

    pub fn write(_cfg: &RuntimeConfig) {}

    pub async fn fetch() -> Option<RuntimeConfig> {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = globals::snapshot() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = globals::fetch().await {
        globals::write(&cfg);
        if let Some(url) = cfg.api_base_url.filter(|url| !url.trim().is_empty()) {
            return cache_base_url(&url);
        }
    }
    log::info!("No runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn host_build_falls_back_to_default_origin() {
        assert_eq!(await_api_base_url().await, DEFAULT_API_BASE_URL);
    }
}
