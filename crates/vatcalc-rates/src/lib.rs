//! # vatcalc-rates
//!
//! Concrete rate providers for `vatcalc-core`.
//!
//! ## Overview
//! ```text
//! rates.toml ──┐
//!              ├──► RatesConfig ──► RateTable ──► PriceCalculator
//! env vars ────┘                    (RateProvider)
//! ```
//!
//! ## Example
//! ```rust
//! use vatcalc_core::{Money, PriceCalculator};
//! use vatcalc_rates::{RateTable, RatesConfig};
//!
//! let config = RatesConfig::from_toml_str(r#"
//!     [types]
//!     Clothes = "0.20"
//! "#).unwrap();
//!
//! let calculator = PriceCalculator::with_provider(RateTable::from_config(&config));
//! let gross = calculator
//!     .gross_price_for_type("10.00".parse::<Money>().unwrap(), "Clothes")
//!     .unwrap();
//! assert_eq!(gross.to_string(), "12.0000");
//! ```

pub mod config;
pub mod error;
pub mod table;

pub use config::RatesConfig;
pub use error::{RatesError, RatesResult};
pub use table::RateTable;
