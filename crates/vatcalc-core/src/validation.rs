//! # Validation Module
//!
//! Input validation for vatcalc.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parsing (FromStr for Money / VatRate)                        │
//! │  └── Exact decimal syntax, nothing rounded on the way in               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Construction (Product::with_type_label)                      │
//! │  └── THIS MODULE: type label rules                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculation (PriceCalculator)                                │
//! │  └── THIS MODULE: rate must not exceed 1                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{PricingError, PricingResult, ValidationError, ValidationResult};
use crate::types::VatRate;
use crate::MAX_TYPE_LABEL_LEN;

// =============================================================================
// Rate Validators
// =============================================================================

/// Validates a VAT rate before it is applied.
///
/// ## Rules
/// - Must not exceed 1 (100%)
/// - Exactly 1 is allowed
/// - Zero and negative rates are allowed
///
/// ## Example
/// ```rust
/// use vatcalc_core::validation::validate_rate;
/// use vatcalc_core::VatRate;
///
/// assert!(validate_rate(VatRate::from_percent(23)).is_ok());
/// assert!(validate_rate(VatRate::ONE).is_ok());
/// assert!(validate_rate(VatRate::from_percent(1000)).is_err());
/// ```
pub fn validate_rate(rate: VatRate) -> PricingResult<()> {
    if rate > VatRate::ONE {
        return Err(PricingError::InvalidRate {
            rate: rate.fraction(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product-type label.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_TYPE_LABEL_LEN` (50) characters after trimming
///
/// ## Example
/// ```rust
/// use vatcalc_core::validation::validate_type_label;
///
/// assert!(validate_type_label("Food0VatByGovPromo").is_ok());
/// assert!(validate_type_label("").is_err());
/// assert!(validate_type_label("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_type_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "type label".to_string(),
        });
    }

    if label.chars().count() > MAX_TYPE_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "type label".to_string(),
            max: MAX_TYPE_LABEL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
