//! Runtime Configuration
//!
//! Resolved once at startup from `window.__TODO_CONFIG__`, then build-time
//! environment, then defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const DEFAULT_ENDPOINT: &str = "http://localhost:3000/";
const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;
const WINDOW_CONFIG_KEY: &str = "__TODO_CONFIG__";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// GraphQL endpoint URL
    pub endpoint: String,
    pub log_level: log::Level,
}

/// Shape of the optional `window.__TODO_CONFIG__` object
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WindowConfig {
    endpoint: Option<String>,
    log_level: Option<String>,
}

impl AppConfig {
    /// Load config from the page, falling back to build env and defaults
    pub fn load() -> Self {
        let window_config = read_window_config();
        Self::resolve(
            window_config,
            option_env!("TODO_GRAPHQL_ENDPOINT"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    fn resolve(window: WindowConfig, env_endpoint: Option<&str>, env_log_level: Option<&str>) -> Self {
        let endpoint = window
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .or_else(|| env_endpoint.filter(|e| !e.trim().is_empty()).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let log_level = window
            .log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .or_else(|| env_log_level.and_then(|level| level.parse().ok()))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { endpoint, log_level }
    }
}

fn read_window_config() -> WindowConfig {
    let Some(window) = web_sys::window() else {
        return WindowConfig::default();
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_CONFIG_KEY)).unwrap_or(JsValue::UNDEFINED);
    if raw.is_undefined() || raw.is_null() {
        return WindowConfig::default();
    }
    serde_wasm_bindgen::from_value(raw).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(WindowConfig::default(), None, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_window_overrides_env() {
        let window = WindowConfig {
            endpoint: Some("https://api.example.com/graphql".to_string()),
            log_level: Some("debug".to_string()),
        };
        let config = AppConfig::resolve(window, Some("http://env/"), Some("warn"));
        assert_eq!(config.endpoint, "https://api.example.com/graphql");
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_env_used_when_window_blank() {
        let window = WindowConfig {
            endpoint: Some("  ".to_string()),
            log_level: None,
        };
        let config = AppConfig::resolve(window, Some("http://env/"), Some("warn"));
        assert_eq!(config.endpoint, "http://env/");
        assert_eq!(config.log_level, log::Level::Warn);
    }

    #[test]
    fn test_blank_env_endpoint_uses_default() {
        let config = AppConfig::resolve(WindowConfig::default(), Some(""), None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_bad_window_log_level_uses_env() {
        let window = WindowConfig {
            endpoint: None,
            log_level: Some("chatty".to_string()),
        };
        let config = AppConfig::resolve(window, None, Some("debug"));
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = AppConfig::resolve(WindowConfig::default(), None, Some("chatty"));
        assert_eq!(config.log_level, log::Level::Info);
    }
}
