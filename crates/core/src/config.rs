use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `TALENTLINK__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub marketplace: MarketplaceConfig,
    #[serde(default)]
    pub media: MediaConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
    /// Highest talent/campaign rate level. Levels are 1..=max_rate_level.
    #[serde(default = "default_max_rate_level")]
    pub max_rate_level: u8,
    /// Whether to seed demo founders/talents/campaigns at startup.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaConfig {
    /// Base URL under which stored objects are publicly served.
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,
    /// Per-file upload cap in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

// Default functions
fn default_node_id() -> String {
    "node-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_max_rate_level() -> u8 {
    3
}
fn default_seed_demo() -> bool {
    false
}
fn default_cdn_base_url() -> String {
    "https://cdn.talentlink.io".to_string()
}
fn default_max_upload_bytes() -> u64 {
    20 * 1024 * 1024
}
fn default_metrics_port() -> u16 {
    9091
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            max_rate_level: default_max_rate_level(),
            seed_demo: default_seed_demo(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: default_cdn_base_url(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            port: default_metrics_port(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            marketplace: MarketplaceConfig::default(),
            media: MediaConfig::default(),
            metrics: MetricsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("TALENTLINK")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
