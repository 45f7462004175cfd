//! Client Configuration
//!
//! Build-time settings for the web client. Every value has a default; the
//! frontend passes `option_env!` overrides through [`ClientConfig::from_overrides`].

use log::LevelFilter;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PAGE_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Todo/Auth API, without trailing slash
    pub api_base_url: String,
    /// Items requested per `GET /todos/` page
    pub page_size: u32,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_level: LevelFilter::Info,
        }
    }
}

impl ClientConfig {
    /// Applies optional overrides on top of the defaults. Blank values count as unset.
    pub fn from_overrides(
        api_base_url: Option<&str>,
        page_size: Option<&str>,
        log_level: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = non_blank(api_base_url) {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url.to_string()));
            }
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(size) = non_blank(page_size) {
            config.page_size = size
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidPageSize(size.to_string()))?;
        }

        if let Some(level) = non_blank(log_level) {
            config.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))?;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
