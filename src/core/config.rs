use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_CATALOG_URL: &str =
    "https://api.github.com/repos/Switcheo/token-icons/contents/tokens";
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogProviderConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PricesProviderConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub catalog: Option<CatalogProviderConfig>,
    pub prices: Option<PricesProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            catalog: Some(CatalogProviderConfig {
                url: DEFAULT_CATALOG_URL.to_string(),
            }),
            prices: Some(PricesProviderConfig {
                url: DEFAULT_PRICES_URL.to_string(),
            }),
        }
    }
}

impl ProvidersConfig {
    pub fn catalog_url(&self) -> &str {
        self.catalog.as_ref().map_or(DEFAULT_CATALOG_URL, |p| &p.url)
    }

    pub fn prices_url(&self) -> &str {
        self.prices.as_ref().map_or(DEFAULT_PRICES_URL, |p| &p.url)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// Decimal places used when printing a converted amount
    #[serde(default = "DisplayConfig::default_decimals")]
    pub decimals: usize,
}

impl DisplayConfig {
    fn default_decimals() -> usize {
        2
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            decimals: Self::default_decimals(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been set up.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "tokswap", "tokswap")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  catalog:
    url: "http://example.com/tokens"
  prices:
    url: "http://example.com/prices.json"
display:
  decimals: 4
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.providers.catalog_url(), "http://example.com/tokens");
        assert_eq!(
            config.providers.prices_url(),
            "http://example.com/prices.json"
        );
        assert_eq!(config.display.decimals, 4);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = serde_yaml::from_str("display: {}").unwrap();
        assert_eq!(config.providers.catalog_url(), DEFAULT_CATALOG_URL);
        assert_eq!(config.providers.prices_url(), DEFAULT_PRICES_URL);
        assert_eq!(config.display.decimals, 2);

        let yaml_str = r#"
providers:
  prices:
    url: "http://localhost:8080/prices.json"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert!(config.providers.catalog.is_none());
        assert_eq!(config.providers.catalog_url(), DEFAULT_CATALOG_URL);
        assert_eq!(
            config.providers.prices_url(),
            "http://localhost:8080/prices.json"
        );
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("nope.yaml"));
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Failed to read config file")
        );
    }
}
