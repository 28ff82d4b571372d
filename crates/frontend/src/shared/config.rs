//! Runtime settings of the client.
//!
//! There is no config file in the browser: settings come from the page query
//! string, e.g. `?log=info&search_min=2`. Unknown keys are ignored.

use serde::{Deserialize, Serialize};

/// Настройки приложения
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log level name understood by the `log` crate
    #[serde(rename = "log")]
    pub log_level: String,
    /// Minimum query length before the item search starts filtering
    #[serde(rename = "search_min")]
    pub search_min_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "debug".to_string(),
            search_min_chars: 1,
        }
    }
}

impl AppConfig {
    /// Parse settings from a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Result<Self, serde_qs::Error> {
        serde_qs::from_str(query.trim_start_matches('?'))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// Whether a search query is long enough to filter the item list.
    pub fn is_search_active(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty() && query.chars().count() >= self.search_min_chars
    }
}

/// `window.location.search`, empty outside a browser.
pub fn current_query() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(AppConfig::from_query("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_query("?").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::from_query("?log=warn&search_min=3&active=tax").unwrap();
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(config.search_min_chars, 3);
    }

    #[test]
    fn test_bad_values() {
        assert!(AppConfig::from_query("search_min=lots").is_err());

        let config = AppConfig::from_query("log=chatty").unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_search_activation() {
        let config = AppConfig {
            search_min_chars: 3,
            ..AppConfig::default()
        };
        assert!(!config.is_search_active("ri"));
        assert!(!config.is_search_active("   "));
        assert!(config.is_search_active("rin"));
        assert!(AppConfig::default().is_search_active("r"));
    }
}
