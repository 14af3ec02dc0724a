//! # Rate Providers
//!
//! The seam between the calculator and wherever rates come from.
//!
//! ## Provider Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RateProvider                                      │
//! │                                                                         │
//! │  default_rate()            ──► VatRate   the standard rate             │
//! │  rate_for_type("Books")    ──► VatRate   rate for a product type       │
//! │                                                                         │
//! │  • Synchronous, no failure path at this boundary                       │
//! │  • Unknown labels: the provider decides                                │
//! │  • The calculator adds no timeout or retry of its own                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations in this crate:
//! - [`StandardRate`]: what a calculator uses when nothing is injected
//! - [`FixedRate`]: one rate for every lookup, handy as a test substitute
//!
//! Table-driven providers live in `vatcalc-rates`.

use std::rc::Rc;
use std::sync::Arc;

use crate::types::VatRate;
use crate::DEFAULT_VAT_RATE;

/// Supplies VAT rates to a [`PriceCalculator`](crate::calculator::PriceCalculator).
pub trait RateProvider {
    /// Returns the standard rate.
    fn default_rate(&self) -> VatRate;

    /// Returns the rate for a product-type label.
    fn rate_for_type(&self, type_label: &str) -> VatRate;
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn default_rate(&self) -> VatRate {
        (**self).default_rate()
    }

    fn rate_for_type(&self, type_label: &str) -> VatRate {
        (**self).rate_for_type(type_label)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Box<P> {
    fn default_rate(&self) -> VatRate {
        (**self).default_rate()
    }

    fn rate_for_type(&self, type_label: &str) -> VatRate {
        (**self).rate_for_type(type_label)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Rc<P> {
    fn default_rate(&self) -> VatRate {
        (**self).default_rate()
    }

    fn rate_for_type(&self, type_label: &str) -> VatRate {
        (**self).rate_for_type(type_label)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Arc<P> {
    fn default_rate(&self) -> VatRate {
        (**self).default_rate()
    }

    fn rate_for_type(&self, type_label: &str) -> VatRate {
        (**self).rate_for_type(type_label)
    }
}

// =============================================================================
// Standard Rate
// =============================================================================

/// Zero-configuration provider: [`DEFAULT_VAT_RATE`] (23%) for everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRate;

impl RateProvider for StandardRate {
    fn default_rate(&self) -> VatRate {
        DEFAULT_VAT_RATE
    }

    fn rate_for_type(&self, _type_label: &str) -> VatRate {
        DEFAULT_VAT_RATE
    }
}

// =============================================================================
// Fixed Rate
// =============================================================================

/// Answers every lookup with the same rate.
///
/// ## Example
/// ```rust
/// use vatcalc_core::provider::{FixedRate, RateProvider};
/// use vatcalc_core::VatRate;
///
/// let provider = FixedRate::new(VatRate::from_percent(20));
/// assert_eq!(provider.rate_for_type("Clothes"), VatRate::from_percent(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRate(VatRate);

impl FixedRate {
    /// Creates a provider answering every lookup with `rate`.
    pub const fn new(rate: VatRate) -> Self {
        FixedRate(rate)
    }
}

impl RateProvider for FixedRate {
    fn default_rate(&self) -> VatRate {
        self.0
    }

    fn rate_for_type(&self, _type_label: &str) -> VatRate {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
