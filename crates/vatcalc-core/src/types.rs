//! # Domain Types
//!
//! Core domain types used throughout vatcalc.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Product      │   │    VatRate      │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  id (UUID)      │   │  Decimal        │                              │
//! │  │  net_price      │   │  0.23 = 23%     │                              │
//! │  │  type_label?    │   │  ordered        │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both types are immutable value objects: built once, read, dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::validation::validate_type_label;

// =============================================================================
// VAT Rate
// =============================================================================

/// Tax rate expressed as a fraction of 1.
///
/// ## Why a Fraction?
/// `0.23` multiplies directly: `net × (1 + 0.23)`. No basis points, no
/// percent conversion, no precision lost on the way.
///
/// The type itself accepts any decimal; the calculator decides which rates
/// are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VatRate(Decimal);

impl VatRate {
    /// Zero rate (exempt goods, promotional zero VAT).
    pub const ZERO: VatRate = VatRate(Decimal::ZERO);

    /// 100%, the highest rate the calculator accepts.
    pub const ONE: VatRate = VatRate(Decimal::ONE);

    /// Creates a rate from a fraction of 1.
    #[inline]
    pub const fn new(fraction: Decimal) -> Self {
        VatRate(fraction)
    }

    /// Creates a rate from whole percent.
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_core::VatRate;
    ///
    /// assert_eq!(VatRate::from_percent(23).to_string(), "0.23");
    /// ```
    #[inline]
    pub fn from_percent(percent: i64) -> Self {
        VatRate(Decimal::new(percent, 2))
    }

    /// Returns the rate as a fraction of 1.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Checks if the rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `1 + rate`, the factor a net price is multiplied by.
    ///
    /// `None` when the sum leaves the decimal range.
    #[inline]
    pub fn gross_factor(&self) -> Option<Decimal> {
        Decimal::ONE.checked_add(self.0)
    }

    /// Compares by representation rather than by value (`0.20` vs `0.2`).
    pub fn is_identical_to(&self, other: &VatRate) -> bool {
        self.0.mantissa() == other.0.mantissa() && self.0.scale() == other.0.scale()
    }
}

impl Default for VatRate {
    fn default() -> Self {
        VatRate::ZERO
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for VatRate {
    fn from(fraction: Decimal) -> Self {
        VatRate(fraction)
    }
}

impl FromStr for VatRate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::Required {
                field: "rate".to_string(),
            });
        }

        Decimal::from_str_exact(s)
            .map(VatRate)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "rate".to_string(),
                reason: e.to_string(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product with a net price.
///
/// ## Identity
/// - `id`: UUID v4, opaque, never interpreted
/// - `type_label`: optional business category ("Books", "Clothes") used to
///   pick a rate from a [`RateProvider`](crate::provider::RateProvider)
///
/// Fields are private; a product cannot change after construction.
/// Deserialization goes through the same label validation as
/// [`Product::with_type_label`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductData")]
pub struct Product {
    id: Uuid,
    net_price: Money,
    type_label: Option<String>,
}

/// Wire shape of a [`Product`], before validation.
#[derive(Deserialize)]
struct ProductData {
    id: Uuid,
    net_price: Money,
    #[serde(default)]
    type_label: Option<String>,
}

impl TryFrom<ProductData> for Product {
    type Error = ValidationError;

    fn try_from(data: ProductData) -> ValidationResult<Self> {
        let product = Product::with_id(data.id, data.net_price);
        match data.type_label {
            Some(label) => product.with_type_label(&label),
            None => Ok(product),
        }
    }
}

impl Product {
    /// Creates a product with a freshly generated id.
    pub fn new(net_price: Money) -> Self {
        Self::with_id(Uuid::new_v4(), net_price)
    }

    /// Creates a product with a known id.
    pub fn with_id(id: Uuid, net_price: Money) -> Self {
        Product {
            id,
            net_price,
            type_label: None,
        }
    }

    /// Attaches a product-type label.
    ///
    /// The label is trimmed and must pass
    /// [`validate_type_label`](crate::validation::validate_type_label).
    ///
    /// ## Example
    /// ```rust
    /// use vatcalc_core::{Money, Product};
    ///
    /// let net: Money = "10.00".parse().unwrap();
    /// let book = Product::new(net).with_type_label(" Books ").unwrap();
    /// assert_eq!(book.type_label(), Some("Books"));
    ///
    /// assert!(Product::new(net).with_type_label("   ").is_err());
    /// ```
    pub fn with_type_label(self, label: &str) -> ValidationResult<Self> {
        validate_type_label(label)?;
        Ok(Product {
            type_label: Some(label.trim().to_string()),
            ..self
        })
    }

    /// Returns the product id.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the net price.
    #[inline]
    pub fn net_price(&self) -> Money {
        self.net_price
    }

    /// Returns the product-type label, if any.
    #[inline]
    pub fn type_label(&self) -> Option<&str> {
        self.type_label.as_deref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
