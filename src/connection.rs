use std::fmt::Debug;

use crate::config::ServerConfig;

/// Base URL and API key of the remote server, resolved once per batch.
#[derive(Clone)]
pub struct ServerConnection {
    base_url: String,
    api_key: String,
}

/// strips at most one trailing slash
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

impl ServerConnection {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url).to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Applies command line overrides on top of the configured server.
    pub fn resolve(
        config: &ServerConfig,
        url_override: Option<&str>,
        api_key_override: Option<&str>,
    ) -> Self {
        Self::new(
            url_override.unwrap_or(&config.url),
            api_key_override.unwrap_or(&config.api_key),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `Authorization: Bearer <key>` when a key is configured, nothing otherwise
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        if self.api_key.is_empty() {
            Vec::new()
        } else {
            vec![(
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            )]
        }
    }
}

impl Debug for ServerConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConnection")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}
