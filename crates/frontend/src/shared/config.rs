//! Application configuration
//!
//! The app fetches `config.toml` from its own origin before mounting. Missing
//! or invalid files fall back to the embedded default; missing keys fall back
//! to their defaults.

use contracts::domain::a001_order::title::TitlePolicy;
use gloo_net::http::Request;
use leptos::prelude::*;
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub orders: OrdersConfig,
    pub catalogue: CatalogueConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Backend port, used when `base_url` is not set
    pub port: u16,
    /// Explicit backend URL, e.g. "https://api.example.com"
    pub base_url: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            base_url: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OrdersConfig {
    pub title: TitlePolicy,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogueConfig {
    pub page_size: usize,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[orders.title]
order_number_width = 5
fallback_label = "Demande #"
include_client = true

[catalogue]
page_size = 20
"#;

/// Path of the optional override served next to `index.html`
const CONFIG_PATH: &str = "/config.toml";

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if config.catalogue.page_size == 0 {
        config.catalogue.page_size = CatalogueConfig::default().page_size;
    }
    Ok(config)
}

pub fn default_config() -> AppConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Load configuration: `/config.toml` if served and valid, embedded default otherwise
pub async fn load_config() -> AppConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        Ok(response) => {
            log::warn!("{} not available (HTTP {}), using default configuration", CONFIG_PATH, response.status());
            return default_config();
        }
        Err(e) => {
            log::warn!("Failed to fetch {}: {}, using default configuration", CONFIG_PATH, e);
            return default_config();
        }
    };

    let contents = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Failed to read {}: {}", CONFIG_PATH, e);
            return default_config();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::info!("Loaded configuration from {}", CONFIG_PATH);
            config
        }
        Err(e) => {
            log::error!("Invalid {}: {}, using default configuration", CONFIG_PATH, e);
            default_config()
        }
    }
}

/// Make the API settings visible to the request helpers. Only the first call wins.
pub fn install_api_config(api: ApiConfig) {
    if API_CONFIG.set(api).is_err() {
        log::warn!("API configuration already installed");
    }
}

pub fn api_config() -> ApiConfig {
    API_CONFIG.get().cloned().unwrap_or_default()
}

/// Configuration provided by `App`
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(default_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.orders.title, TitlePolicy::canonical());
        assert_eq!(config.catalogue.page_size, 20);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config(
            r#"
            [orders.title]
            order_number_width = 4
            fallback_label = "Commande #"
            include_client = false
            "#,
        )
        .unwrap();
        assert_eq!(config.orders.title, TitlePolicy::legacy());
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.catalogue.page_size, 20);
    }

    #[test]
    fn test_zero_page_size_is_replaced() {
        let config = parse_config("[catalogue]\npage_size = 0\n").unwrap();
        assert_eq!(config.catalogue.page_size, 20);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(parse_config("[api]\nport = \"trois mille\"\n").is_err());
    }
}
