//! # Error Types
//!
//! Domain-specific error types for vatcalc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vatcalc-core errors (this file)                                       │
//! │  ├── PricingError     - Gross price calculation failures               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  vatcalc-rates errors (separate crate)                                 │
//! │  └── RatesError       - Config loading / parsing failures              │
//! │                                                                         │
//! │  Flow: ValidationError → PricingError → caller                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending value in the message (rate, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. A rejected rate is always returned to the caller, never clamped

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Pricing Error
// =============================================================================

/// Errors returned by the price calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// The rate represents more than 100%.
    ///
    /// ## When This Occurs
    /// - A caller passes a rate above 1 directly
    /// - A rate provider resolves a label to a rate above 1
    ///
    /// A rate of exactly 1 is accepted.
    #[error("Invalid rate {rate}: a VAT rate must not exceed 1")]
    InvalidRate { rate: Decimal },

    /// The gross price does not fit into the decimal range.
    #[error("Gross price for net {net} at rate {rate} overflows the decimal range")]
    ArithmeticOverflow { net: Decimal, rate: Decimal },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before any calculation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., a price that is not a decimal number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
