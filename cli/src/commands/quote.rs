//! Fee quote command implementation
//!
//! This is the CLI counterpart of the platform's quote endpoint: validate
//! the contract amount and payment method, run the fee engine, and return
//! the full breakdown with formatted display fields and the method's fee
//! configuration.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use smartflo_pricing::{
    calculate_total_with_fees, fee_breakdown, fee_config, format_currency, PaymentMethod,
};
use tracing::info;

use super::OutputFormat;
use crate::utils::formatting::{format_quote_human, success_envelope};

/// Execute the quote command
///
/// # Errors
/// Returns an error if the amount is not a positive integer or the payment
/// method tag is not in the supported set. Input validation happens before
/// any computation.
pub fn execute(amount: i64, method_str: &str, output_format: &OutputFormat) -> Result<String> {
    info!("Quoting fees for amount {} via {}", amount, method_str);

    if amount <= 0 {
        return Err(anyhow!(
            "Contract amount must be a positive number of minor currency units, got {amount}"
        ));
    }
    let amount = u64::try_from(amount)
        .map_err(|e| anyhow!("Invalid contract amount '{amount}': {e}"))?;

    let method = PaymentMethod::from_str(method_str)?;
    let quote = calculate_total_with_fees(amount, method)?;
    let breakdown = fee_breakdown(method, amount)?;
    let config = fee_config(method)?;

    info!(
        "Fee for {} via {}: {} (total {})",
        quote.contract_amount, method, quote.transaction_fee, quote.total_amount
    );

    match output_format {
        OutputFormat::Human => format_quote_human(&quote, &breakdown, method),
        OutputFormat::Json => {
            let contract_signed = i64::try_from(quote.contract_amount)
                .map_err(|_| anyhow!("Amount too large to format"))?;
            let fee_signed = i64::try_from(quote.transaction_fee)
                .map_err(|_| anyhow!("Fee too large to format"))?;
            let total_signed = i64::try_from(quote.total_amount)
                .map_err(|_| anyhow!("Total too large to format"))?;

            success_envelope(serde_json::json!({
                "contract_amount": quote.contract_amount,
                "transaction_fee": quote.transaction_fee,
                "total_amount": quote.total_amount,
                "fee_percentage": quote.fee_percentage,
                "contract_amount_formatted": format_currency(contract_signed),
                "transaction_fee_formatted": format_currency(fee_signed),
                "total_amount_formatted": format_currency(total_signed),
                "payment_method": method.as_tag(),
                "payment_method_name": method.display_name(),
                "fee_breakdown": breakdown,
                "fee_config": config,
            }))
        }
    }
}
