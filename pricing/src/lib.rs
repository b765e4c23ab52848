//! SmartFlo Pricing - fee calculation engine for the SmartFlo platform
//!
//! This crate owns the deterministic money arithmetic behind SmartFlo's
//! milestone payments: the static subscription plan table, the per-method
//! transaction fee configuration, and the pure functions that turn a
//! contract amount into a fee, a total, and a client-facing breakdown.
//!
//! All amounts are integer minor currency units (cents) and all rates are
//! basis points, so every result is exact and reproducible; floating point
//! only appears in display percentages. The engine has no I/O and no
//! shared mutable state, making it safe under any request concurrency.
//!
//! # Example Usage
//!
//! ```
//! use smartflo_pricing::{calculate_total_with_fees, format_currency, PaymentMethod};
//!
//! # fn main() -> smartflo_pricing::Result<()> {
//! // Quote a $5,000.00 contract paid by card
//! let quote = calculate_total_with_fees(500_000, PaymentMethod::StripeCard)?;
//! assert_eq!(quote.transaction_fee, 17_030);
//! let total = i64::try_from(quote.total_amount).unwrap();
//! assert_eq!(format_currency(total), "$5,170.30");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod constants;
pub mod currency;
pub mod error;
pub mod fees;
pub mod method;
pub mod plans;

// Re-export commonly used items
pub use currency::format_currency;
pub use error::{PricingError, Result};
pub use fees::{
    calculate_total_with_fees, calculate_transaction_fee, fee_breakdown, fee_config,
    format_rate_bps, FeeBreakdown, QuoteBreakdown, TransactionFeeConfig, FEE_CONFIGS,
};
pub use method::PaymentMethod;
pub use plans::{plan, PricingPlan, PRICING_PLANS};
