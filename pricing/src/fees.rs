//! Transaction fee configuration and the fee calculation engine
//!
//! The engine is a pure, synchronous computation over static configuration:
//! no I/O, no shared mutable state, no suspension points. Amounts are
//! integer minor currency units (cents) end to end; rates are basis points.
//! Nothing touches floating point until the final display conversion, so
//! concurrent callers always get identical, exact results.

use serde::Serialize;

use crate::constants::FEE_BASIS_POINTS_DIVISOR;
use crate::error::{PricingError, Result};
use crate::method::PaymentMethod;

/// Fee configuration for a single payment method
///
/// Rates are stored in basis points (1 bp = 0.01%) so the whole fee
/// computation stays in exact integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransactionFeeConfig {
    /// Payment method this entry applies to
    pub method: PaymentMethod,
    /// Primary fee rate in basis points: the processor rate for Stripe
    /// methods, the flat platform rate for USDC
    pub fee_bps: u32,
    /// Cap on the rate component in minor units; `None` means uncapped.
    /// The cap applies to the rate component only, before any platform
    /// fee is layered on top.
    pub fee_cap: Option<u64>,
    /// Fixed fee component in minor units, used by card-style methods
    pub base_fee: Option<u64>,
    /// Platform markup in basis points charged on top of the processor
    /// fee, never capped
    pub platform_fee_bps: u32,
}

/// Static fee table, one entry per supported payment method
pub const FEE_CONFIGS: [TransactionFeeConfig; 3] = [
    TransactionFeeConfig {
        method: PaymentMethod::Usdc,
        fee_bps: 150,          // 1.5%
        fee_cap: Some(10_000), // $100 cap
        base_fee: None,
        platform_fee_bps: 0,
    },
    TransactionFeeConfig {
        method: PaymentMethod::StripeAch,
        fee_bps: 80,        // 0.8% ACH processor rate
        fee_cap: Some(500), // $5 cap on the processor component
        base_fee: None,
        platform_fee_bps: 50, // 0.5% platform fee, uncapped
    },
    TransactionFeeConfig {
        method: PaymentMethod::StripeCard,
        fee_bps: 290, // 2.9% card processor rate, uncapped
        fee_cap: None,
        base_fee: Some(30),   // $0.30 fixed Stripe fee
        platform_fee_bps: 50, // 0.5% platform fee, uncapped
    },
];

/// Look up the fee configuration entry for a payment method.
///
/// A missing entry is a configuration defect: the table must cover every
/// supported method, and the engine fails loudly with
/// [`PricingError::MissingFeeConfig`] rather than defaulting to a zero fee.
pub fn fee_config(method: PaymentMethod) -> Result<&'static TransactionFeeConfig> {
    FEE_CONFIGS
        .iter()
        .find(|config| config.method == method)
        .ok_or(PricingError::MissingFeeConfig(method))
}

/// Half of the basis-points divisor, added before the final division to
/// round half-up instead of truncating
const ROUNDING_HALF: u128 = FEE_BASIS_POINTS_DIVISOR / 2;

/// Rate and platform fee components, scaled by the basis-points divisor.
/// Kept scaled until the final rounding so the sum is rounded exactly once.
struct ScaledComponents {
    /// Capped rate component plus any fixed fee
    rate: u128,
    /// Platform markup component
    platform: u128,
}

fn scaled_components(config: &TransactionFeeConfig, amount: u64) -> Result<ScaledComponents> {
    let overflow = || PricingError::ArithmeticOverflow { amount };
    let amount_wide = u128::from(amount);

    let mut rate = amount_wide
        .checked_mul(u128::from(config.fee_bps))
        .ok_or_else(overflow)?;
    if let Some(cap) = config.fee_cap {
        let cap_scaled = u128::from(cap)
            .checked_mul(FEE_BASIS_POINTS_DIVISOR)
            .ok_or_else(overflow)?;
        rate = rate.min(cap_scaled);
    }
    if let Some(base_fee) = config.base_fee {
        let base_scaled = u128::from(base_fee)
            .checked_mul(FEE_BASIS_POINTS_DIVISOR)
            .ok_or_else(overflow)?;
        rate = rate.checked_add(base_scaled).ok_or_else(overflow)?;
    }

    let platform = amount_wide
        .checked_mul(u128::from(config.platform_fee_bps))
        .ok_or_else(overflow)?;

    Ok(ScaledComponents { rate, platform })
}

/// Round a scaled fee half-up to whole minor units
fn round_scaled(scaled: u128, amount: u64) -> Result<u64> {
    let rounded = scaled
        .checked_add(ROUNDING_HALF)
        .ok_or(PricingError::ArithmeticOverflow { amount })?
        / FEE_BASIS_POINTS_DIVISOR;
    u64::try_from(rounded).map_err(|_| PricingError::ArithmeticOverflow { amount })
}

/// Calculate the transaction fee for a contract amount and payment method.
///
/// The fee is the sum of the method's rate component (clamped to its cap
/// where one is configured, plus any fixed fee) and the uncapped platform
/// markup, rounded half-up to whole minor units after summation. Per
/// method this yields exactly:
///
/// - `stripe_card`: `round(amount x 2.9% + 30 + amount x 0.5%)`
/// - `stripe_ach`: `round(min(amount x 0.8%, 500) + amount x 0.5%)`
/// - `usdc`: `min(round(amount x 1.5%), 10_000)`
///
/// # Errors
/// Returns [`PricingError::MissingFeeConfig`] when the fee table has no
/// entry for the method, and [`PricingError::ArithmeticOverflow`] if an
/// intermediate value would overflow.
pub fn calculate_transaction_fee(amount: u64, method: PaymentMethod) -> Result<u64> {
    let config = fee_config(method)?;
    let components = scaled_components(config, amount)?;
    let total = components
        .rate
        .checked_add(components.platform)
        .ok_or(PricingError::ArithmeticOverflow { amount })?;
    round_scaled(total, amount)
}

/// A fee quote: the contract amount with its transaction fee applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteBreakdown {
    /// Contract amount in minor currency units
    pub contract_amount: u64,
    /// Transaction fee added on top, in minor currency units
    pub transaction_fee: u64,
    /// `contract_amount + transaction_fee`
    pub total_amount: u64,
    /// Effective fee as a display percentage of the contract amount.
    /// Pinned to `0.0` when the contract amount is zero so `NaN` never
    /// reaches a serialized response.
    pub fee_percentage: f64,
}

/// Calculate the total charge for a contract amount, including the
/// transaction fee for the given payment method.
///
/// # Errors
/// Same failure modes as [`calculate_transaction_fee`]; additionally
/// returns [`PricingError::ArithmeticOverflow`] if the total would
/// overflow `u64`.
#[allow(clippy::cast_precision_loss)] // acceptable for display percentages
pub fn calculate_total_with_fees(amount: u64, method: PaymentMethod) -> Result<QuoteBreakdown> {
    let transaction_fee = calculate_transaction_fee(amount, method)?;
    let total_amount = amount
        .checked_add(transaction_fee)
        .ok_or(PricingError::ArithmeticOverflow { amount })?;

    let fee_percentage = if amount == 0 {
        0.0
    } else {
        transaction_fee as f64 / amount as f64 * 100.0
    };

    Ok(QuoteBreakdown {
        contract_amount: amount,
        transaction_fee,
        total_amount,
        fee_percentage,
    })
}

/// Method-specific fee breakdown for client display
///
/// A read model over the same arithmetic as [`calculate_transaction_fee`];
/// `total_fee` always equals the engine's fee, and the component subtotals
/// sum exactly to it (the platform subtotal absorbs the sub-unit rounding
/// remainder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method")]
pub enum FeeBreakdown {
    /// Flat-rate USDC fee with a hard cap
    #[serde(rename = "usdc")]
    Usdc {
        total_fee: u64,
        rate: String,
        fee_cap: Option<u64>,
    },
    /// Capped ACH processor fee plus the uncapped platform fee
    #[serde(rename = "stripe_ach")]
    StripeAch {
        stripe_fee: u64,
        platform_fee: u64,
        stripe_rate: String,
        platform_rate: String,
        fee_cap: Option<u64>,
        total_fee: u64,
    },
    /// Uncapped card processor fee (rate plus fixed component) plus the
    /// platform fee
    #[serde(rename = "stripe_card")]
    StripeCard {
        stripe_fee: u64,
        platform_fee: u64,
        stripe_rate: String,
        platform_rate: String,
        base_fee: u64,
        total_fee: u64,
    },
}

impl FeeBreakdown {
    /// Total fee across all components, in minor currency units
    #[must_use]
    pub const fn total_fee(&self) -> u64 {
        match self {
            Self::Usdc { total_fee, .. }
            | Self::StripeAch { total_fee, .. }
            | Self::StripeCard { total_fee, .. } => *total_fee,
        }
    }
}

/// Build the method-specific fee breakdown for a contract amount.
///
/// # Errors
/// Same failure modes as [`calculate_transaction_fee`].
pub fn fee_breakdown(method: PaymentMethod, amount: u64) -> Result<FeeBreakdown> {
    let config = fee_config(method)?;
    let components = scaled_components(config, amount)?;
    let total = components
        .rate
        .checked_add(components.platform)
        .ok_or(PricingError::ArithmeticOverflow { amount })?;
    let total_fee = round_scaled(total, amount)?;

    let breakdown = match method {
        PaymentMethod::Usdc => FeeBreakdown::Usdc {
            total_fee,
            rate: format_rate_bps(config.fee_bps),
            fee_cap: config.fee_cap,
        },
        PaymentMethod::StripeAch | PaymentMethod::StripeCard => {
            // Round the processor component on its own; the platform
            // subtotal takes the remainder so the parts sum to total_fee.
            let stripe_fee = round_scaled(components.rate, amount)?;
            let platform_fee = total_fee
                .checked_sub(stripe_fee)
                .ok_or(PricingError::ArithmeticOverflow { amount })?;
            let stripe_rate = format_rate_bps(config.fee_bps);
            let platform_rate = format_rate_bps(config.platform_fee_bps);

            if method == PaymentMethod::StripeAch {
                FeeBreakdown::StripeAch {
                    stripe_fee,
                    platform_fee,
                    stripe_rate,
                    platform_rate,
                    fee_cap: config.fee_cap,
                    total_fee,
                }
            } else {
                FeeBreakdown::StripeCard {
                    stripe_fee,
                    platform_fee,
                    stripe_rate,
                    platform_rate,
                    base_fee: config.base_fee.unwrap_or(0),
                    total_fee,
                }
            }
        }
    };

    Ok(breakdown)
}

/// Render a basis-points rate as a display percentage string, e.g.
/// `290` -> `"2.9%"`, `50` -> `"0.5%"`
#[must_use]
pub fn format_rate_bps(bps: u32) -> String {
    let whole = bps / 100;
    let frac = bps % 100;
    if frac == 0 {
        format!("{whole}%")
    } else if frac % 10 == 0 {
        format!("{whole}.{}%", frac / 10)
    } else {
        format!("{whole}.{frac:02}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_config_covers_every_method() {
        for method in PaymentMethod::ALL {
            let config = fee_config(method).unwrap();
            assert_eq!(config.method, method);
        }
    }

    #[test]
    fn test_usdc_config_has_no_platform_layer() {
        let config = fee_config(PaymentMethod::Usdc).unwrap();
        assert_eq!(config.platform_fee_bps, 0);
        assert_eq!(config.base_fee, None);
        assert_eq!(config.fee_cap, Some(10_000));
    }

    #[test]
    fn test_rate_formatting() {
        assert_eq!(format_rate_bps(290), "2.9%");
        assert_eq!(format_rate_bps(50), "0.5%");
        assert_eq!(format_rate_bps(150), "1.5%");
        assert_eq!(format_rate_bps(80), "0.8%");
        assert_eq!(format_rate_bps(200), "2%");
        assert_eq!(format_rate_bps(125), "1.25%");
    }

    #[test]
    fn test_half_up_rounding() {
        // 100 cents at 1.5% is exactly 1.5 cents; half-up rounds to 2
        assert_eq!(
            calculate_transaction_fee(100, PaymentMethod::Usdc).unwrap(),
            2
        );
        // 30 cents at 1.5% is 0.45 cents; rounds down to 0
        assert_eq!(
            calculate_transaction_fee(30, PaymentMethod::Usdc).unwrap(),
            0
        );
    }

    #[test]
    fn test_card_fixed_fee_applies_at_zero_amount() {
        // A zero-amount card charge still carries the $0.30 fixed fee
        assert_eq!(
            calculate_transaction_fee(0, PaymentMethod::StripeCard).unwrap(),
            30
        );
        assert_eq!(
            calculate_transaction_fee(0, PaymentMethod::Usdc).unwrap(),
            0
        );
        assert_eq!(
            calculate_transaction_fee(0, PaymentMethod::StripeAch).unwrap(),
            0
        );
    }

    #[test]
    fn test_zero_amount_quote_has_zero_percentage() {
        let quote = calculate_total_with_fees(0, PaymentMethod::StripeCard).unwrap();
        assert_eq!(quote.transaction_fee, 30);
        assert_eq!(quote.total_amount, 30);
        assert!(quote.fee_percentage.abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_serializes_with_method_tag() {
        let breakdown = fee_breakdown(PaymentMethod::StripeCard, 500_000).unwrap();
        let value = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(value["method"], "stripe_card");
        assert_eq!(value["base_fee"], 30);
        assert_eq!(value["stripe_rate"], "2.9%");
    }
}
