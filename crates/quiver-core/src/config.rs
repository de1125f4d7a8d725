//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    faq::FaqEntry,
    nav::NavItem,
};

/// Main configuration structure for Quiver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Search box settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Header/footer fragment settings.
    #[serde(default)]
    pub fragments: FragmentConfig,

    /// Development server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Featured plan pricing.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Animation settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Main navigation entries.
    #[serde(default)]
    pub nav: Vec<NavItem>,

    /// Frequently asked questions.
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,
}

/// Search box configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before suggestions are regenerated.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum number of characters before suggestions are shown.
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,

    /// Maximum number of suggestions rendered.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Number of recent searches kept in storage.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,

    /// Number of recent searches offered as suggestions.
    #[serde(default = "default_recent_suggestions")]
    pub recent_suggestions: usize,

    /// Local storage key holding recent searches.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Delay before hiding suggestions on blur, so clicks still land.
    #[serde(default = "default_blur_hide_ms")]
    pub blur_hide_ms: u64,
}

/// Fragment loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FragmentConfig {
    /// Base path fragments are fetched from.
    #[serde(default = "default_fragment_base")]
    pub base_path: String,
}

/// Development server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory served as the site root.
    #[serde(default = "default_server_root")]
    pub root: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Open a browser after starting.
    #[serde(default)]
    pub open: bool,
}

/// Featured plan pricing, in cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_monthly_cents")]
    pub monthly_cents: u64,

    #[serde(default = "default_yearly_cents")]
    pub yearly_cents: u64,
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Whether animations run at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Speed-up applied when the user prefers reduced motion.
    #[serde(default = "default_reduced_motion_time_scale")]
    pub reduced_motion_time_scale: f64,
}

// Default value functions
fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_length() -> usize {
    2
}

fn default_max_suggestions() -> usize {
    8
}

fn default_recent_limit() -> usize {
    10
}

fn default_recent_suggestions() -> usize {
    3
}

fn default_storage_key() -> String {
    "recentSearches".to_string()
}

fn default_blur_hide_ms() -> u64 {
    150
}

fn default_fragment_base() -> String {
    "components".to_string()
}

fn default_server_root() -> String {
    ".".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_monthly_cents() -> u64 {
    2500
}

fn default_yearly_cents() -> u64 {
    25000
}

fn default_true() -> bool {
    true
}

fn default_reduced_motion_time_scale() -> f64 {
    10.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_length: default_min_query_length(),
            max_suggestions: default_max_suggestions(),
            recent_limit: default_recent_limit(),
            recent_suggestions: default_recent_suggestions(),
            storage_key: default_storage_key(),
            blur_hide_ms: default_blur_hide_ms(),
        }
    }
}

impl Default for FragmentConfig {
    fn default() -> Self {
        Self {
            base_path: default_fragment_base(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: default_server_root(),
            port: default_port(),
            open: false,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            monthly_cents: default_monthly_cents(),
            yearly_cents: default_yearly_cents(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            reduced_motion_time_scale: default_reduced_motion_time_scale(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text, e.g. a file embedded at compile time.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, with `QUIVER__` environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("QUIVER").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        if self.search.max_suggestions == 0 {
            return Err(CoreError::config("search.max_suggestions must be positive"));
        }

        if self.search.recent_limit == 0 {
            return Err(CoreError::config("search.recent_limit must be positive"));
        }

        if self.animation.reduced_motion_time_scale <= 0.0 {
            return Err(CoreError::config(
                "animation.reduced_motion_time_scale must be positive",
            ));
        }

        Ok(())
    }

    /// Get the URL a named fragment is fetched from.
    pub fn fragment_url(&self, name: &str) -> String {
        let base = self.fragments.base_path.trim_end_matches('/');
        format!("{base}/{name}.html")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Quiver Quantitative"
base_url = "https://example.com"

[search]
debounce_ms = 250
max_suggestions = 6

[fragments]
base_path = "/src/components/"

[server]
port = 8080

[pricing]
monthly_cents = 3000

[[nav]]
label = "Insider Trading"
url = "insider-trading.html"
page = "insider-trading"

[[faq]]
question = "Where does the data come from?"
answer = "Public filings."
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("quiver.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.title, "Quiver Quantitative");
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.max_suggestions, 6);
        assert_eq!(config.search.min_query_length, 2);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.pricing.monthly_cents, 3000);
        assert_eq!(config.pricing.yearly_cents, 25000);
        assert_eq!(config.nav.len(), 1);
        assert_eq!(config.nav[0].page.as_deref(), Some("insider-trading"));
        assert_eq!(config.faq.len(), 1);
    }

    #[test]
    fn test_config_defaults() {
        let minimal = r#"
[site]
title = "Minimal"
base_url = "https://example.com"
"#;
        let config = Config::from_toml_str(minimal).expect("parse config");

        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.max_suggestions, 8);
        assert_eq!(config.search.recent_limit, 10);
        assert_eq!(config.search.recent_suggestions, 3);
        assert_eq!(config.search.storage_key, "recentSearches");
        assert_eq!(config.fragments.base_path, "components");
        assert_eq!(config.server.port, 3000);
        assert!(config.animation.enabled);
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_fragment_url() {
        let config = Config::from_toml_str(&create_test_config()).expect("parse config");
        assert_eq!(config.fragment_url("header"), "/src/components/header.html");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let content = r#"
[site]
title = ""
base_url = "https://example.com"
"#;
        let result = Config::from_toml_str(content);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_zero_suggestions() {
        let content = r#"
[site]
title = "Quiver"
base_url = "https://example.com"

[search]
max_suggestions = 0
"#;
        assert!(Config::from_toml_str(content).is_err());
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/quiver.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }
}
