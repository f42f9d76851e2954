//! Runtime settings shared by the CLI and the GUI.

use std::time::Duration;

/// Default REST Countries endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Settings for the client and the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API root without a trailing slash, e.g. `https://restcountries.com/v3.1`.
    pub base_url: String,
    /// Total request timeout.
    pub timeout: Duration,
    /// Number formatting locale tag (`en`, `de`, `fr`, ...).
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout: Duration::from_secs(30),
            locale: "en".into(),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let cfg = Config::default().with_base_url("http://localhost:8080/v3.1/");
        assert_eq!(cfg.base_url, "http://localhost:8080/v3.1");
    }
}
