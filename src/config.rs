use std::env;

use url::form_urlencoded;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Runtime configuration, read from the environment exactly once at startup
/// and passed by reference into everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API, e.g. `http://localhost:8080/api`.
    pub api_base_url: String,
    /// Optional API key; empty string means no key is configured.
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = env::var("IMAGE_API_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_key = env::var("IMAGE_API_KEY").unwrap_or_default();
        Self::new(api_base_url, api_key)
    }

    pub fn new(api_base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            api_key: api_key.into(),
        }
    }

    /// Base URL for file asset links: the API base with its trailing `/api`
    /// segment stripped, since asset paths already carry the `/api` prefix.
    pub fn asset_base_url(&self) -> &str {
        self.api_base_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_base_url)
    }

    /// `?api_key=...` suffix for asset links, or an empty string when no key
    /// is configured.
    pub fn api_key_query(&self) -> String {
        if self.api_key.is_empty() {
            return String::new();
        }
        let encoded: String = form_urlencoded::byte_serialize(self.api_key.as_bytes()).collect();
        format!("?api_key={encoded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let config = Config::new("http://localhost:8080/api/", "");
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn asset_base_drops_api_suffix() {
        let config = Config::new("http://localhost:8080/api", "");
        assert_eq!(config.asset_base_url(), "http://localhost:8080");
    }

    #[test]
    fn asset_base_keeps_url_without_api_suffix() {
        let config = Config::new("http://cdn.example.com", "");
        assert_eq!(config.asset_base_url(), "http://cdn.example.com");
    }

    #[test]
    fn api_key_query_is_empty_without_key() {
        let config = Config::new("http://localhost:8080/api", "");
        assert_eq!(config.api_key_query(), "");
    }

    #[test]
    fn api_key_query_is_url_encoded() {
        let config = Config::new("http://localhost:8080/api", "k&y=1");
        assert_eq!(config.api_key_query(), "?api_key=k%26y%3D1");
    }
}
