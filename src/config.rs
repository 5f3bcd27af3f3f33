use anyhow::{Context, bail};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerConfig::default(),
            dispatch: DispatchConfig::default(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| "Failed to parse config TOML")?;
        if config.version != 1 {
            bail!("unsupported config version {}", config.version);
        }
        Ok(config)
    }

    /// like [`Config::load`], but a missing file means "use defaults"
    pub fn load_or_default(path: &Path) -> anyhow::Result<Config> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!(
                "config {} not found, using defaults",
                path.to_string_lossy()
            );
            Ok(Config::default())
        }
    }
}

/// Where the server lives and how to authenticate against it.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_url")]
    pub url: String,
    /// sent as a bearer token, empty means no authentication
    #[serde(default)]
    pub api_key: String,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            api_key: String::new(),
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct DispatchConfig {
    /// fail on unknown (resource, operation) pairs instead of skipping them
    #[serde(default)]
    pub strict_operations: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_config_toml() -> anyhow::Result<()> {
        let toml_str = r#"
version = 1

[server]
url = "http://192.168.1.96:3000/"
api_key = "s3cret"

[dispatch]
strict_operations = true
"#;

        let cfg: Config = toml::from_str(toml_str)?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.server.url, "http://192.168.1.96:3000/");
        assert_eq!(cfg.server.api_key, "s3cret");
        assert!(cfg.dispatch.strict_operations);

        Ok(())
    }

    #[test]
    fn test_parse_minimal_config() -> anyhow::Result<()> {
        let cfg: Config = toml::from_str("[server]\napi_key = \"k\"\n")?;

        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.server.url, DEFAULT_SERVER_URL);
        assert_eq!(cfg.server.api_key, "k");
        assert!(!cfg.dispatch.strict_operations);

        Ok(())
    }

    #[test]
    fn test_debug_hides_api_key() {
        let server = ServerConfig {
            url: DEFAULT_SERVER_URL.to_string(),
            api_key: "s3cret".to_string(),
        };

        assert!(!format!("{server:?}").contains("s3cret"));
    }

    #[test]
    fn test_load_or_default() -> anyhow::Result<()> {
        let dir = tempdir()?;

        let missing = Config::load_or_default(&dir.path().join("missing.toml"))?;
        assert_eq!(missing.server.url, DEFAULT_SERVER_URL);
        assert!(missing.server.api_key.is_empty());

        let path = dir.path().join("raspcast.toml");
        std::fs::write(&path, "[server]\nurl = \"http://pi:3000\"\n")?;
        let loaded = Config::load_or_default(&path)?;
        assert_eq!(loaded.server.url, "http://pi:3000");

        std::fs::write(&path, "[server\n")?;
        assert!(Config::load_or_default(&path).is_err());

        std::fs::write(&path, "version = 2\n")?;
        assert!(Config::load_or_default(&path).is_err());

        Ok(())
    }
}
