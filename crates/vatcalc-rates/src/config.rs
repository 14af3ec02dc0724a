//! # Rates Configuration
//!
//! Where a [`RateTable`](crate::table::RateTable) gets its numbers.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     VATCALC_DEFAULT_RATE=0.21                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/vatcalc/rates.toml (Linux)                               │
//! │     ~/Library/Application Support/com.vatcalc.vatcalc/rates.toml      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     default_rate = 0.23, no per-type rates                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rates.toml
//! default_rate = "0.23"
//!
//! [types]
//! Books = "0.05"
//! Food0VatByGovPromo = "0"
//! ```
//!
//! Rates are written as strings so they reach `Decimal` without passing
//! through a float.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vatcalc_core::{VatRate, DEFAULT_VAT_RATE};

use crate::error::{RatesError, RatesResult};
use crate::table::normalize;

/// Environment variable overriding the default rate.
pub const ENV_DEFAULT_RATE: &str = "VATCALC_DEFAULT_RATE";

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "rates.toml";

// =============================================================================
// On-Disk Shape
// =============================================================================

/// rates.toml exactly as written, before any decimal parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RatesFile {
    #[serde(default = "default_rate_string")]
    default_rate: String,

    #[serde(default)]
    types: BTreeMap<String, String>,
}

fn default_rate_string() -> String {
    DEFAULT_VAT_RATE.to_string()
}

fn parse_rate(label: &str, value: &str) -> RatesResult<VatRate> {
    value.parse().map_err(|_| RatesError::InvalidRate {
        label: label.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Rates Configuration
// =============================================================================

/// Parsed rate configuration.
///
/// Rates above 1 are kept as configured. The calculator rejects them when
/// they are used; loading only warns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatesConfig {
    /// Rate used when no product type applies.
    pub default_rate: VatRate,

    /// Rates by product-type label, as written in the file.
    pub types: BTreeMap<String, VatRate>,
}

impl Default for RatesConfig {
    fn default() -> Self {
        RatesConfig {
            default_rate: DEFAULT_VAT_RATE,
            types: BTreeMap::new(),
        }
    }
}

impl RatesConfig {
    /// Creates a config with the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a rates.toml document.
    ///
    /// Type labels are matched case-insensitively by
    /// [`RateTable`](crate::table::RateTable), so two labels that differ only
    /// in case or surrounding spaces are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_rates::config::RatesConfig;
    /// use vatcalc_core::VatRate;
    ///
    /// let config = RatesConfig::from_toml_str(r#"
    ///     default_rate = "0.20"
    ///
    ///     [types]
    ///     Books = "0.05"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.default_rate, VatRate::from_percent(20));
    /// assert_eq!(config.types["Books"], VatRate::from_percent(5));
    /// ```
    pub fn from_toml_str(contents: &str) -> RatesResult<Self> {
        let file: RatesFile = toml::from_str(contents)?;

        let default_rate = parse_rate("default_rate", &file.default_rate)?;

        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut types = BTreeMap::new();
        for (label, value) in &file.types {
            if let Some(existing) = seen.insert(normalize(label), label) {
                return Err(RatesError::DuplicateType {
                    label: label.clone(),
                    existing: existing.to_string(),
                });
            }
            types.insert(label.clone(), parse_rate(label, value)?);
        }

        Ok(RatesConfig {
            default_rate,
            types,
        })
    }

    /// Renders the config as a rates.toml document.
    pub fn to_toml_string(&self) -> RatesResult<String> {
        let file = RatesFile {
            default_rate: self.default_rate.to_string(),
            types: self
                .types
                .iter()
                .map(|(label, rate)| (label.clone(), rate.to_string()))
                .collect(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform default)
    /// 3. Environment variables
    ///
    /// A missing file is not an error.
    pub fn load(config_path: Option<PathBuf>) -> RatesResult<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// [`RatesConfig::load`] with an explicit environment lookup.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> RatesResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading rates config from file");
                config = Self::read_file(&path)?;
            } else {
                debug!(?path, "Rates config file not found, using defaults");
            }
        }

        config.apply_env_overrides(env);
        config.warn_on_rates_above_one();

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load rates config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> RatesResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| RatesError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml_string()?)?;

        info!(?path, "Rates config saved");
        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "vatcalc", "vatcalc")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn read_file(path: &Path) -> RatesResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn apply_env_overrides<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = env(ENV_DEFAULT_RATE) {
            match value.parse::<VatRate>() {
                Ok(rate) => {
                    debug!(rate = %rate, "Overriding default rate from environment");
                    self.default_rate = rate;
                }
                Err(e) => warn!(value = %value, error = %e, "Ignoring unparsable {}", ENV_DEFAULT_RATE),
            }
        }
    }

    fn warn_on_rates_above_one(&self) {
        if self.default_rate > VatRate::ONE {
            warn!(rate = %self.default_rate, "Configured default rate exceeds 1");
        }
        for (label, rate) in &self.types {
            if *rate > VatRate::ONE {
                warn!(type_label = %label, rate = %rate, "Configured rate exceeds 1");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = RatesConfig::default();
        assert_eq!(config.default_rate, VatRate::from_percent(23));
        assert!(config.types.is_empty());
    }

    #[test]
    fn test_parse_full_document() {
        let config = RatesConfig::from_toml_str(
            r#"
            default_rate = "0.21"

            [types]
            Books = "0.05"
            Food0VatByGovPromo = "0"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_rate, VatRate::new(dec!(0.21)));
        assert_eq!(config.types.len(), 2);
        assert_eq!(config.types["Books"], VatRate::new(dec!(0.05)));
        assert!(config.types["Food0VatByGovPromo"].is_zero());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = RatesConfig::from_toml_str("").unwrap();
        assert_eq!(config, RatesConfig::default());
    }

    #[test]
    fn test_invalid_rate_names_the_label() {
        let err = RatesConfig::from_toml_str(
            r#"
            [types]
            Books = "five percent"
            "#,
        )
        .unwrap_err();

        match err {
            RatesError::InvalidRate { label, value } => {
                assert_eq!(label, "Books");
                assert_eq!(value, "five percent");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_type_names_both_labels() {
        let err = RatesConfig::from_toml_str(
            r#"
            [types]
            Books = "0.05"
            books = "0.50"
            "#,
        )
        .unwrap_err();

        match err {
            RatesError::DuplicateType { label, existing } => {
                assert_eq!(existing, "Books");
                assert_eq!(label, "books");
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = RatesConfig::from_toml_str(
            r#"
            [types]
            "Food" = "0"
            " food " = "0.08"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, RatesError::DuplicateType { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let err = RatesConfig::from_toml_str("default_rate = ").unwrap_err();
        assert!(matches!(err, RatesError::Parse(_)));
    }

    #[test]
    fn test_rates_above_one_are_kept() {
        let config = RatesConfig::from_toml_str(
            r#"
            [types]
            Luxury = "10"
            "#,
        )
        .unwrap();
        assert_eq!(config.types["Luxury"], VatRate::new(dec!(10)));
    }

    #[test]
    fn test_env_override() {
        let mut config = RatesConfig::default();
        config.apply_env_overrides(|key| (key == ENV_DEFAULT_RATE).then(|| "0.19".to_string()));
        assert_eq!(config.default_rate, VatRate::new(dec!(0.19)));
    }

    #[test]
    fn test_unparsable_env_override_is_ignored() {
        let mut config = RatesConfig::default();
        config.apply_env_overrides(|_| Some("nineteen".to_string()));
        assert_eq!(config.default_rate, DEFAULT_VAT_RATE);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = RatesConfig::load_with_env(Some(path), no_env).unwrap();
        assert_eq!(config, RatesConfig::default());
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            "default_rate = \"0.20\"\n[types]\nBooks = \"0.05\"\n",
        )
        .unwrap();

        let from_file = RatesConfig::load_with_env(Some(path.clone()), no_env).unwrap();
        assert_eq!(from_file.default_rate, VatRate::from_percent(20));

        let overridden = RatesConfig::load_with_env(Some(path), |_| Some("0.08".into())).unwrap();
        assert_eq!(overridden.default_rate, VatRate::from_percent(8));
        assert_eq!(overridden.types["Books"], VatRate::from_percent(5));
    }

    #[test]
    fn test_save_then_load_preserves_scale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = RatesConfig::default();
        config.types.insert("Clothes".into(), "0.20".parse().unwrap());
        config.save(Some(path.clone())).unwrap();

        let loaded = RatesConfig::load_with_env(Some(path), no_env).unwrap();
        assert_eq!(loaded, config);
        assert!(loaded.types["Clothes"].is_identical_to(&"0.20".parse().unwrap()));
    }

    #[test]
    fn test_toml_rendering() {
        let toml_str = RatesConfig::default().to_toml_string().unwrap();
        assert!(toml_str.contains("default_rate = \"0.23\""));
    }
}
