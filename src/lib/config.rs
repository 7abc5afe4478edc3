//! Build-time configuration for the backend endpoint and client behavior, with
//! an optional runtime override. The runtime config is read from
//! `window.USUARIOS_CONFIG` (if present) so static deployments can point at a
//! different backend without rebuilding. Configuration values are public; do
//! not store secrets here.

use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Ask the user before deleting a record. Off means delete is unconditional.
    pub confirm_delete: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            confirm_delete: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("USUARIOS_API_BASE_URL"),
            option_env!("USUARIOS_CONFIRM_DELETE"),
            option_env!("USUARIOS_LOG_LEVEL"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(
        api_base_url: Option<&str>,
        confirm_delete: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .and_then(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            confirm_delete: confirm_delete
                .and_then(parse_flag)
                .unwrap_or(defaults.confirm_delete),
            log_level: log_level
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.log_level),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    confirm_delete: Option<bool>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.confirm_delete {
        config.confirm_delete = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USUARIOS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url")
            .as_deref()
            .and_then(normalize_base_url),
        confirm_delete: read_runtime_flag(&object, "confirm_delete"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

/// Accepts either a JS boolean or a string flag.
#[cfg(target_arch = "wasm32")]
fn read_runtime_flag(object: &js_sys::Object, key: &str) -> Option<bool> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    value
        .as_bool()
        .or_else(|| value.as_string().as_deref().and_then(parse_flag))
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Keeps only absolute `http`/`https` URLs.
fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = normalize_runtime_value(value)?;
    let url = Url::parse(&trimmed).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(trimmed)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_base_url, normalize_runtime_value, parse_flag,
        AppConfig, RuntimeConfig,
    };

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  http://localhost:3000 "),
            Some("http://localhost:3000".to_string())
        );
    }

    #[test]
    fn normalize_base_url_requires_http_scheme() {
        assert_eq!(
            normalize_base_url(" https://api.usuarios.dev "),
            Some("https://api.usuarios.dev".to_string())
        );
        assert_eq!(normalize_base_url("localhost:3000"), None);
        assert_eq!(normalize_base_url("ftp://files.example.com"), None);
        assert_eq!(normalize_base_url("/relative/path"), None);
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn build_env_defaults_to_local_backend() {
        let config = AppConfig::from_build_env(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert!(!config.confirm_delete);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn build_env_ignores_invalid_values() {
        let config = AppConfig::from_build_env(Some("not a url"), Some("perhaps"), Some("  "));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn build_env_applies_valid_values() {
        let config = AppConfig::from_build_env(
            Some("https://api.usuarios.dev"),
            Some("true"),
            Some("debug"),
        );
        assert_eq!(config.api_base_url, "https://api.usuarios.dev");
        assert!(config.confirm_delete);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            confirm_delete: None,
            log_level: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = AppConfig::default();
        let runtime = RuntimeConfig {
            api_base_url: normalize_base_url("https://api.override"),
            confirm_delete: Some(true),
            log_level: normalize_runtime_value("warn"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert!(config.confirm_delete);
        assert_eq!(config.log_level, "warn");
    }
}
