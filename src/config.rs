//! Build-time Configuration
//!
//! Values are injected through environment variables when the WASM bundle is
//! built (`LOGIQ_API_BASE_URL=https://api.example.com trunk build`).

use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 5_000;

/// Admin console configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout
    pub request_timeout_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build from raw values; missing or malformed values fall back to defaults.
    pub fn from_values(
        api_base_url: Option<&str>,
        request_timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let api_base_url = api_base_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.api_base_url);

        let request_timeout_ms = request_timeout_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.request_timeout_ms);

        let log_level = log_level
            .and_then(|raw| raw.trim().parse::<log::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            api_base_url,
            request_timeout_ms,
            log_level,
        }
    }

    fn from_build_env() -> Self {
        Self::from_values(
            option_env!("LOGIQ_API_BASE_URL"),
            option_env!("LOGIQ_REQUEST_TIMEOUT_MS"),
            option_env!("LOGIQ_LOG_LEVEL"),
        )
    }

    /// Full URL for an API path such as `/question/questions`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Process-wide configuration, resolved on first use
pub fn config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(AppConfig::from_build_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = AppConfig::from_values(None, None, None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.api_base_url, "http://localhost:3000");
        assert_eq!(cfg.request_timeout_ms, 5_000);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let cfg = AppConfig::from_values(Some("https://api.logiq.dev/"), None, None);
        assert_eq!(cfg.api_base_url, "https://api.logiq.dev");
        assert_eq!(cfg.url("/auth/login-admin"), "https://api.logiq.dev/auth/login-admin");
        assert_eq!(cfg.url("question/delete"), "https://api.logiq.dev/question/delete");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = AppConfig::from_values(Some("   "), Some("0"), Some("loud"));
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(cfg.log_level, log::Level::Info);

        let cfg = AppConfig::from_values(None, Some("abc"), Some("debug"));
        assert_eq!(cfg.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        assert_eq!(cfg.log_level, log::Level::Debug);
    }
}
