//! # Storefront Configuration
//!
//! Read once at startup, read-only afterwards.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                               │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. storefront.toml (explicit path, or the platform config dir)        │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. HAVEN_* environment variables                                      │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. validate()                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! database_path = "/var/lib/haven/haven.db"
//! admin_email = "admin@example.com"
//! tax_rate_bps = 1000
//! currency_symbol = "$"
//! auth_delay_ms = 1000
//! checkout_delay_ms = 2000
//! recommendation_delay_ms = 1500
//! recommendation_seed = 42
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use haven_core::validation::validate_email;
use haven_core::{TaxRate, ADMIN_EMAIL};

use crate::latency::SimulatedLatency;

const CONFIG_FILE_NAME: &str = "storefront.toml";
const DATABASE_FILE_NAME: &str = "haven.db";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Local storage database file. `None` means the platform data dir.
    pub database_path: Option<PathBuf>,

    /// The account that may open the admin panel.
    pub admin_email: String,

    /// Tax rate in basis points, e.g. 1000 = 10%.
    pub tax_rate_bps: u32,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    pub auth_delay_ms: u64,
    pub checkout_delay_ms: u64,
    pub recommendation_delay_ms: u64,

    /// Fixed seed for the recommender. `None` seeds from the OS.
    pub recommendation_seed: Option<u64>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let latency = SimulatedLatency::default();
        StorefrontConfig {
            database_path: None,
            admin_email: ADMIN_EMAIL.to_string(),
            tax_rate_bps: TaxRate::default().bps(),
            currency_symbol: "$".to_string(),
            auth_delay_ms: latency.auth.as_millis() as u64,
            checkout_delay_ms: latency.checkout.as_millis() as u64,
            recommendation_delay_ms: latency.recommendations.as_millis() as u64,
            recommendation_seed: None,
        }
    }
}

impl StorefrontConfig {
    /// Configuration for tests: in-memory storage, no delays, fixed seed.
    pub fn for_tests() -> Self {
        StorefrontConfig {
            database_path: Some(PathBuf::from(":memory:")),
            auth_delay_ms: 0,
            checkout_delay_ms: 0,
            recommendation_delay_ms: 0,
            recommendation_seed: Some(42),
            ..Default::default()
        }
    }

    /// Loads configuration: defaults, then the TOML file, then the
    /// environment, then validation.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_email(&self.admin_email)
            .map_err(|e| ConfigError::Invalid(format!("admin_email: {}", e)))?;

        if self.tax_rate_bps > 10_000 {
            return Err(ConfigError::Invalid(format!(
                "tax_rate_bps must be at most 10000, got {}",
                self.tax_rate_bps
            )));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `HAVEN_*` overrides read through `var`.
    ///
    /// Unparseable numeric values are logged and ignored.
    pub fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("HAVEN_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = Some(PathBuf::from(path));
        }

        if let Some(email) = var("HAVEN_ADMIN_EMAIL") {
            self.admin_email = email;
        }

        if let Some(rate) = var("HAVEN_TAX_RATE") {
            match rate.parse::<f64>() {
                Ok(pct) => self.tax_rate_bps = TaxRate::from_percentage(pct).bps(),
                Err(_) => warn!(value = %rate, "Ignoring invalid HAVEN_TAX_RATE"),
            }
        }

        let millis = |key: &str, target: &mut u64| {
            if let Some(value) = var(key) {
                match value.parse::<u64>() {
                    Ok(ms) => *target = ms,
                    Err(_) => warn!(key, value = %value, "Ignoring invalid delay override"),
                }
            }
        };
        millis("HAVEN_AUTH_DELAY_MS", &mut self.auth_delay_ms);
        millis("HAVEN_CHECKOUT_DELAY_MS", &mut self.checkout_delay_ms);
        millis("HAVEN_RECOMMENDATION_DELAY_MS", &mut self.recommendation_delay_ms);

        if let Some(seed) = var("HAVEN_RECOMMENDATION_SEED") {
            match seed.parse::<u64>() {
                Ok(seed) => self.recommendation_seed = Some(seed),
                Err(_) => warn!(value = %seed, "Ignoring invalid HAVEN_RECOMMENDATION_SEED"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves where the local storage database lives.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.literaryhaven.storefront/haven.db`
    /// - **Windows**: `%APPDATA%\literaryhaven\storefront\data\haven.db`
    /// - **Linux**: `~/.local/share/storefront/haven.db`
    ///
    /// The data directory is created when missing.
    pub fn resolve_database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }

        let dirs = project_dirs().ok_or_else(|| {
            ConfigError::Invalid("Could not determine app data directory".into())
        })?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        Ok(data_dir.join(DATABASE_FILE_NAME))
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency {
            auth: Duration::from_millis(self.auth_delay_ms),
            checkout: Duration::from_millis(self.checkout_delay_ms),
            recommendations: Duration::from_millis(self.recommendation_delay_ms),
        }
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use haven_storefront::state::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(2499), "$24.99");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            (cents / 100).abs(),
            (cents % 100).abs()
        )
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "literaryhaven", "storefront")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.admin_email, "admin@example.com");
        assert_eq!(config.tax_rate().bps(), 1000);
        assert_eq!(config.latency(), SimulatedLatency::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = StorefrontConfig::default();
        assert_eq!(config.format_currency(4838), "$48.38");
        assert_eq!(config.format_currency(5), "$0.05");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_env_overrides(env(&[
            ("HAVEN_DB_PATH", "/tmp/haven-override.db"),
            ("HAVEN_ADMIN_EMAIL", "owner@haven.test"),
            ("HAVEN_TAX_RATE", "8.25"),
            ("HAVEN_AUTH_DELAY_MS", "0"),
            ("HAVEN_CHECKOUT_DELAY_MS", "not-a-number"),
            ("HAVEN_RECOMMENDATION_SEED", "7"),
        ]));

        assert_eq!(
            config.database_path,
            Some(PathBuf::from("/tmp/haven-override.db"))
        );
        assert_eq!(config.admin_email, "owner@haven.test");
        assert_eq!(config.tax_rate_bps, 825);
        assert_eq!(config.auth_delay_ms, 0);
        assert_eq!(config.checkout_delay_ms, 2000);
        assert_eq!(config.recommendation_seed, Some(7));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "tax_rate_bps = 500\ncurrency_symbol = \"€\"\n").unwrap();

        let config = StorefrontConfig::load(Some(path)).unwrap();
        assert_eq!(config.tax_rate_bps, 500);
        assert_eq!(config.currency_symbol, "€");
        // Unset fields keep their defaults
        assert_eq!(config.admin_email, "admin@example.com");
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "tax_rate_bps = \"ten\"").unwrap();

        assert!(matches!(
            StorefrontConfig::load(Some(path.clone())),
            Err(ConfigError::Parse(_))
        ));
        assert_eq!(
            StorefrontConfig::load_or_default(Some(path)).tax_rate_bps,
            1000
        );
    }

    #[test]
    fn test_validation() {
        let mut config = StorefrontConfig::default();
        config.tax_rate_bps = 10_001;
        assert!(config.validate().is_err());

        let mut config = StorefrontConfig::default();
        config.admin_email = "nobody".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_explicit_database_path_wins() {
        let config = StorefrontConfig::for_tests();
        assert_eq!(
            config.resolve_database_path().unwrap(),
            PathBuf::from(":memory:")
        );
    }
}
