//! # Rate Table
//!
//! A [`RateProvider`] answering from a default rate plus per-type rates.
//!
//! ## Lookup
//! ```text
//! rate_for_type(" books ")
//!      │
//!      ▼
//! normalize: trim + lowercase ──► "books"
//!      │
//!      ├── found      ──► that rate
//!      │
//!      └── not found  ──► default rate (warn event)
//! ```

use std::collections::HashMap;
use tracing::warn;
use vatcalc_core::{RateProvider, VatRate};

use crate::config::RatesConfig;

/// Lookup key for a type label: trimmed and lowercased.
pub(crate) fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Rates by product-type label with a fallback default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    default_rate: VatRate,
    by_type: HashMap<String, VatRate>,
}

impl RateTable {
    /// Creates an empty table; every lookup yields `default_rate`.
    pub fn new(default_rate: VatRate) -> Self {
        RateTable {
            default_rate,
            by_type: HashMap::new(),
        }
    }

    /// Builder-style [`RateTable::insert`].
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_core::{RateProvider, VatRate};
    /// use vatcalc_rates::RateTable;
    ///
    /// let table = RateTable::new(VatRate::from_percent(23))
    ///     .with_rate("Books", VatRate::from_percent(5));
    ///
    /// assert_eq!(table.rate_for_type("BOOKS"), VatRate::from_percent(5));
    /// assert_eq!(table.rate_for_type("Toys"), VatRate::from_percent(23));
    /// ```
    pub fn with_rate(mut self, label: &str, rate: VatRate) -> Self {
        self.insert(label, rate);
        self
    }

    /// Sets the rate for a label, returning the rate it replaces.
    pub fn insert(&mut self, label: &str, rate: VatRate) -> Option<VatRate> {
        self.by_type.insert(normalize(label), rate)
    }

    /// Builds a table from loaded configuration.
    ///
    /// [`RatesConfig::from_toml_str`] rejects colliding labels; a config
    /// edited in code may still hold them, and the later label wins with a
    /// warn event.
    pub fn from_config(config: &RatesConfig) -> Self {
        let mut table = Self::new(config.default_rate);
        for (label, rate) in &config.types {
            if let Some(replaced) = table.insert(label, *rate) {
                warn!(type_label = %label, rate = %rate, replaced = %replaced, "Duplicate product type in config");
            }
        }
        table
    }

    /// Rate configured for `label`, without falling back.
    pub fn lookup(&self, label: &str) -> Option<VatRate> {
        self.by_type.get(&normalize(label)).copied()
    }

    /// Number of per-type entries.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Returns `true` if no per-type rate is set.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

impl From<&RatesConfig> for RateTable {
    fn from(config: &RatesConfig) -> Self {
        Self::from_config(config)
    }
}

impl RateProvider for RateTable {
    fn default_rate(&self) -> VatRate {
        self.default_rate
    }

    fn rate_for_type(&self, type_label: &str) -> VatRate {
        self.lookup(type_label).unwrap_or_else(|| {
            warn!(
                type_label,
                rate = %self.default_rate,
                "Unknown product type, using default rate"
            );
            self.default_rate
        })
    }
}
