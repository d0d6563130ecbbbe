//! Build-time configuration with an optional runtime override.
//!
//! Defaults come from `AURA_*` environment variables at compile time. A page
//! may define `window.AURA_CONFIG = { api_base_url, auth_provider_url,
//! log_level, request_timeout_ms }` to change endpoints without rebuilding.
//! Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_AUTH_PROVIDER_URL: &str = "https://auth.emergentagent.com/";
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Prefix joined in front of every API path.
    pub api_base_url: String,
    /// External identity provider that receives the login redirect.
    pub auth_provider_url: String,
    pub log_level: log::Level,
    /// Requests still pending after this many milliseconds are aborted.
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            auth_provider_url: DEFAULT_AUTH_PROVIDER_URL.to_owned(),
            log_level: log::Level::Info,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads build-time values and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        let build = RuntimeConfig {
            api_base_url: option_env!("AURA_API_BASE_URL").and_then(normalize_runtime_value),
            auth_provider_url: option_env!("AURA_AUTH_PROVIDER_URL")
                .and_then(normalize_runtime_value),
            log_level: option_env!("AURA_LOG_LEVEL").and_then(normalize_runtime_value),
            request_timeout_ms: option_env!("AURA_REQUEST_TIMEOUT_MS")
                .and_then(normalize_runtime_value),
        };
        apply_runtime_overrides(&mut config, build);

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    auth_provider_url: Option<String>,
    log_level: Option<String>,
    request_timeout_ms: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.auth_provider_url {
        config.auth_provider_url = value;
    }
    if let Some(level) = runtime
        .log_level
        .and_then(|value| log::Level::from_str(&value).ok())
    {
        config.log_level = level;
    }
    if let Some(timeout) = runtime
        .request_timeout_ms
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|timeout| *timeout > 0)
    {
        config.request_timeout_ms = timeout;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("AURA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        auth_provider_url: read_runtime_value(&object, "auth_provider_url"),
        log_level: read_runtime_value(&object, "log_level"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms"),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let text = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&text)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
