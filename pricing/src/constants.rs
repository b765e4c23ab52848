//! Pricing constants
//!
//! Mathematical constants used throughout the fee engine. These values are
//! immutable invariants; changing them would break every recorded fee
//! calculation.

/// Basis points divisor for percentage calculations
///
/// Basis points are a unit of measure for percentages, where 1 basis point
/// = 0.01%. This constant represents 10,000 basis points = 100%. Storing
/// fee rates in basis points keeps every intermediate fee amount in exact
/// integer arithmetic.
///
/// # Examples
/// ```
/// use smartflo_pricing::constants::FEE_BASIS_POINTS_DIVISOR;
///
/// // 1.5% of $10,000.00 (150 basis points of 1,000,000 cents):
/// let fee = 1_000_000_u128 * 150 / FEE_BASIS_POINTS_DIVISOR;
/// assert_eq!(fee, 15_000); // $150.00
/// ```
pub const FEE_BASIS_POINTS_DIVISOR: u128 = 10_000;
