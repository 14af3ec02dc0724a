//! # vatcalc-core: Pure Pricing Logic for vatcalc
//!
//! This crate computes gross prices from net prices and VAT rates with exact
//! decimal arithmetic. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        vatcalc Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host application (yours)                        │   │
//! │  │      installs a tracing subscriber, picks a RateProvider        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vatcalc-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐ │   │
//! │  │   │   types   │  │   money   │  │ calculator │  │ validation│ │   │
//! │  │   │  Product  │  │   Money   │  │ PriceCalc  │  │   rules   │ │   │
//! │  │   │  VatRate  │  │  rounding │  │ RateProv.  │  │  checks   │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FLOATS • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              vatcalc-rates (RateTable, rates.toml)              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, VatRate)
//! - [`money`] - Money type over an exact decimal (no floating point!)
//! - [`provider`] - The `RateProvider` trait and simple providers
//! - [`calculator`] - Gross price calculation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output
//! 2. **No I/O**: file system and network access are FORBIDDEN here
//! 3. **Exact Money**: prices are decimals with explicit scale, never floats
//! 4. **Scale Rounding**: gross prices are rounded to 4 fractional digits
//! 5. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vatcalc_core::provider::FixedRate;
//! use vatcalc_core::{Money, PriceCalculator, PricingError, VatRate};
//!
//! let calculator = PriceCalculator::with_provider(FixedRate::new(VatRate::from_percent(20)));
//!
//! let net: Money = "10.00".parse().unwrap();
//! let gross = calculator.gross_price_for_type(net, "Clothes").unwrap();
//! assert_eq!(gross.to_string(), "12.0000");
//!
//! // Rates above 100% are reported, never clamped
//! let err = calculator.gross_price(net, VatRate::from_percent(1000)).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidRate { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod money;
pub mod provider;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vatcalc_core::Money` instead of
// `use vatcalc_core::money::Money`

pub use calculator::{gross_price, PriceCalculator, GROSS_SCALE};
pub use error::{PricingError, PricingResult, ValidationError, ValidationResult};
pub use money::Money;
pub use provider::{FixedRate, RateProvider, StandardRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Standard VAT rate used when no provider is supplied (23%).
// mantissa 23, scale 2: exactly 0.23
pub const DEFAULT_VAT_RATE: VatRate =
    VatRate::new(rust_decimal::Decimal::from_parts(23, 0, 0, false, 2));

/// Maximum length of a product-type label, in characters.
pub const MAX_TYPE_LABEL_LEN: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_vat_rate_is_exactly_0_23() {
        let expected = VatRate::new(dec!(0.23));
        assert_eq!(DEFAULT_VAT_RATE, expected);
        assert!(DEFAULT_VAT_RATE.is_identical_to(&expected));
        assert_eq!(DEFAULT_VAT_RATE.to_string(), "0.23");
    }
}
