//! Build-time configuration.
//!
//! A client-side app has no process environment at runtime, so values are
//! baked in at compile time through `option_env!`:
//! - `MANAGIFY_API_BASE_URL`: REST base URL (default `http://localhost:8080/api/v1`)
//! - `MANAGIFY_NOTICE_TTL_MS`: how long a notice stays on screen (default 4000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub notice_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MANAGIFY_API_BASE_URL"),
            option_env!("MANAGIFY_NOTICE_TTL_MS"),
        )
    }

    pub fn from_values(api_base_url: Option<&str>, notice_ttl_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        let notice_ttl_ms = notice_ttl_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_NOTICE_TTL_MS);

        Self {
            api_base_url,
            notice_ttl_ms,
        }
    }
}
