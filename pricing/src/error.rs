//! Error types for the SmartFlo pricing engine
//!
//! Every failure here is deterministic and input-driven: there is no I/O,
//! no retry concept, and no partial result. Callers reject bad input
//! synchronously, before any computation.

use thiserror::Error;

use crate::method::PaymentMethod;

/// Result type for pricing operations
pub type Result<T> = std::result::Result<T, PricingError>;

/// Error types that can occur during fee calculation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The payment method tag is not in the closed set of supported tags.
    /// Surfaced to callers as a client error, never coerced to a default.
    #[error("Unsupported payment method: '{0}'. Supported methods are usdc, stripe_ach and stripe_card.")]
    UnsupportedPaymentMethod(String),

    /// A valid payment method has no entry in the fee configuration table.
    /// This is a build or deployment defect, not a user-retryable condition;
    /// fee calculation must fail loudly rather than default to a zero fee.
    #[error("No fee configuration entry for payment method '{0}'. This indicates a configuration defect; contact the platform operator.")]
    MissingFeeConfig(PaymentMethod),

    /// An intermediate fee computation would overflow
    #[error("Arithmetic overflow while computing fees for amount {amount}")]
    ArithmeticOverflow { amount: u64 },
}
