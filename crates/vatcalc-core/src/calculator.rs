//! # Price Calculator
//!
//! Turns a net price and a VAT rate into a gross price.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  gross_price(net, rate)                                                 │
//! │                                                                         │
//! │  1. rate > 1 ?  ──yes──► Err(InvalidRate)      (exactly 1 is fine)      │
//! │       │ no                                                              │
//! │       ▼                                                                 │
//! │  2. gross = net × (1 + rate)                   exact, 256-bit product  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. round to 4 FRACTIONAL digits, half up      never significant digits│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Ok(gross)                                  sign follows net        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entry Points
//! ```text
//! gross_for_default_rate(product) ──► provider.default_rate() ──┐
//! gross_price_for_type(net, label) ─► provider.rate_for_type() ─┼──► gross_price
//! gross_for_product(product) ──────► label? type : default ─────┘
//! ```
//!
//! ## Logging
//! `tracing` events are emitted along the way. Nothing is printed unless the
//! host installs a subscriber, and message text is not part of the contract.

use primitive_types::U256;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::provider::{RateProvider, StandardRate};
use crate::types::{Product, VatRate};
use crate::validation::validate_rate;

/// Fractional digits of every gross price.
pub const GROSS_SCALE: u32 = 4;

/// Computes a gross price from a net price and a rate.
///
/// ## Example
/// ```rust
/// use vatcalc_core::calculator::gross_price;
/// use vatcalc_core::{Money, VatRate};
///
/// let net: Money = "2021.13".parse().unwrap();
/// let gross = gross_price(net, VatRate::from_percent(23)).unwrap();
/// assert_eq!(gross.to_string(), "2485.9899");
///
/// assert!(gross_price(net, VatRate::from_percent(1000)).is_err());
/// ```
pub fn gross_price(net: Money, rate: VatRate) -> PricingResult<Money> {
    info!(net = %net, rate = %rate, "Calculating gross price");

    if let Err(e) = validate_rate(rate) {
        warn!(rate = %rate, "Rejected VAT rate above 1");
        return Err(e);
    }

    let gross = exact_gross(net.amount(), rate.fraction(), GROSS_SCALE).ok_or(
        PricingError::ArithmeticOverflow {
            net: net.amount(),
            rate: rate.fraction(),
        },
    )?;

    info!(gross = %gross, "Gross price calculated");
    Ok(Money::new(gross))
}

/// `net × (1 + rate)` rounded half up to `scale` fractional digits.
///
/// ## Why Not `Decimal` Multiplication?
/// ```text
/// mantissa:  96 bits × 96 bits  ──►  up to 192 bits
/// scale:     28      + 28       ──►  up to 56 digits
/// ```
/// `Decimal` holds neither, so its product rounds silently and a second
/// rounding to 4 digits can land on the wrong side of the midpoint. The
/// product is built here on 256-bit integers and rounded exactly once.
///
/// `None` when the rounded result does not fit a `Decimal`.
fn exact_gross(net: Decimal, rate: Decimal, scale: u32) -> Option<Decimal> {
    // 1 + rate at the rate's own scale; |rate mantissa| < 2^96 keeps this in i128
    let factor = 10i128.pow(rate.scale()) + rate.mantissa();
    let negative = (net.mantissa() < 0) != (factor < 0);

    let product =
        U256::from(net.mantissa().unsigned_abs()) * U256::from(factor.unsigned_abs());
    let product_scale = net.scale() + rate.scale();

    let digits = if product_scale > scale {
        let divisor = U256::exp10((product_scale - scale) as usize);
        let (quotient, remainder) = product.div_mod(divisor);
        if remainder >= divisor - remainder {
            quotient + U256::one()
        } else {
            quotient
        }
    } else {
        product.checked_mul(U256::exp10((scale - product_scale) as usize))?
    };

    if digits.bits() > 96 {
        return None;
    }
    let magnitude = i128::try_from(digits.low_u128()).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    Decimal::try_from_i128_with_scale(signed, scale).ok()
}

// =============================================================================
// Price Calculator
// =============================================================================

/// Gross price calculator over an injected [`RateProvider`].
///
/// ## Example
/// ```rust
/// use vatcalc_core::{Money, PriceCalculator, Product};
///
/// // No provider injected: the 23% standard rate applies
/// let calculator = PriceCalculator::new();
///
/// let product = Product::new("100.00".parse::<Money>().unwrap());
/// let gross = calculator.gross_for_default_rate(&product).unwrap();
/// assert_eq!(gross.to_string(), "123.0000");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator<P = StandardRate> {
    provider: P,
}

impl PriceCalculator<StandardRate> {
    /// Creates a calculator using [`StandardRate`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: RateProvider> PriceCalculator<P> {
    /// Creates a calculator that asks `provider` for rates.
    pub fn with_provider(provider: P) -> Self {
        PriceCalculator { provider }
    }

    /// Returns the injected provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Gross price of `product` at the provider's default rate.
    pub fn gross_for_default_rate(&self, product: &Product) -> PricingResult<Money> {
        let rate = self.provider.default_rate();
        debug!(product_id = %product.id(), rate = %rate, "Using default VAT rate");
        gross_price(product.net_price(), rate)
    }

    /// Gross price at the rate the provider assigns to `type_label`.
    ///
    /// Whatever the provider does with unknown labels passes straight
    /// through; only the resolved rate is validated.
    pub fn gross_price_for_type(&self, net: Money, type_label: &str) -> PricingResult<Money> {
        warn!(
            type_label,
            net = %net,
            "Get gross price with VAT specific for product type"
        );
        let rate = self.provider.rate_for_type(type_label);
        gross_price(net, rate)
    }

    /// Gross price of `product`, by type label when it has one.
    pub fn gross_for_product(&self, product: &Product) -> PricingResult<Money> {
        match product.type_label() {
            Some(label) => self.gross_price_for_type(product.net_price(), label),
            None => self.gross_for_default_rate(product),
        }
    }

    /// Gross price at an explicit rate. The provider is not consulted.
    pub fn gross_price(&self, net: Money, rate: VatRate) -> PricingResult<Money> {
        gross_price(net, rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
