//! Output formatting utilities for the SmartFlo CLI

use anyhow::{anyhow, Result};
use smartflo_pricing::{
    format_currency, FeeBreakdown, PaymentMethod, PricingPlan, QuoteBreakdown, FEE_CONFIGS,
};

/// Wrap command data in the standard success envelope
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn success_envelope(data: serde_json::Value) -> Result<String> {
    let envelope = serde_json::json!({
        "success": true,
        "data": data,
    });
    serde_json::to_string_pretty(&envelope)
        .map_err(|e| anyhow!("Failed to serialize response: {e}"))
}

/// Format a minor-unit amount for display
///
/// # Errors
///
/// Returns an error if the amount does not fit a signed 64-bit value
fn display_amount(cents: u64) -> Result<String> {
    let signed = i64::try_from(cents)
        .map_err(|_| anyhow!("Amount {cents} is too large to format for display"))?;
    Ok(format_currency(signed))
}

/// Format a fee quote for human-readable output
///
/// # Errors
///
/// Returns an error if an amount cannot be converted for display
pub fn format_quote_human(
    quote: &QuoteBreakdown,
    breakdown: &FeeBreakdown,
    method: PaymentMethod,
) -> Result<String> {
    use std::fmt::Write;

    let mut output = format!(
        "Fee quote: {} via {}\n\n",
        display_amount(quote.contract_amount)?,
        method.display_name()
    );

    writeln!(
        &mut output,
        "  Contract amount:  {}",
        display_amount(quote.contract_amount)?
    )
    .unwrap();
    writeln!(
        &mut output,
        "  Transaction fee:  {} ({:.2}% effective)",
        display_amount(quote.transaction_fee)?,
        quote.fee_percentage
    )
    .unwrap();
    writeln!(
        &mut output,
        "  Total charge:     {}",
        display_amount(quote.total_amount)?
    )
    .unwrap();

    output.push_str("\nFee components:\n");
    match breakdown {
        FeeBreakdown::Usdc {
            total_fee,
            rate,
            fee_cap,
        } => {
            let cap = match fee_cap {
                Some(cap) => format!(", capped at {}", display_amount(*cap)?),
                None => String::new(),
            };
            writeln!(
                &mut output,
                "  USDC fee ({rate}{cap}): {}",
                display_amount(*total_fee)?
            )
            .unwrap();
        }
        FeeBreakdown::StripeAch {
            stripe_fee,
            platform_fee,
            stripe_rate,
            platform_rate,
            fee_cap,
            ..
        } => {
            let cap = match fee_cap {
                Some(cap) => format!(", capped at {}", display_amount(*cap)?),
                None => String::new(),
            };
            writeln!(
                &mut output,
                "  Stripe ACH fee ({stripe_rate}{cap}): {}",
                display_amount(*stripe_fee)?
            )
            .unwrap();
            writeln!(
                &mut output,
                "  Platform fee ({platform_rate}): {}",
                display_amount(*platform_fee)?
            )
            .unwrap();
        }
        FeeBreakdown::StripeCard {
            stripe_fee,
            platform_fee,
            stripe_rate,
            platform_rate,
            base_fee,
            ..
        } => {
            writeln!(
                &mut output,
                "  Stripe fee ({stripe_rate} + {}): {}",
                display_amount(*base_fee)?,
                display_amount(*stripe_fee)?
            )
            .unwrap();
            writeln!(
                &mut output,
                "  Platform fee ({platform_rate}): {}",
                display_amount(*platform_fee)?
            )
            .unwrap();
        }
    }

    Ok(output)
}

/// Format pricing plans for human-readable output
///
/// # Errors
///
/// Returns an error if a plan price cannot be converted for display
pub fn format_plans_human(plans: &[PricingPlan]) -> Result<String> {
    use std::fmt::Write;

    let mut output = String::from("SmartFlo pricing plans\n\n");
    writeln!(
        &mut output,
        "{:<12} {:<12} {:<12} {:<14} {}",
        "Plan", "Monthly", "Annual", "Contracts/mo", "Features"
    )
    .unwrap();
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for plan in plans {
        // Enterprise is custom-priced rather than free
        let monthly = if plan.price == 0 && plan.id == "enterprise" {
            "Custom".to_string()
        } else {
            display_amount(plan.price)?
        };
        let annual = match plan.annual_price {
            Some(price) => display_amount(price)?,
            None => "-".to_string(),
        };
        let contracts = plan
            .contract_limit
            .map_or_else(|| "Unlimited".to_string(), |limit| limit.to_string());

        writeln!(
            &mut output,
            "{:<12} {:<12} {:<12} {:<14} {}",
            plan.name,
            monthly,
            annual,
            contracts,
            plan.features.len()
        )
        .unwrap();
    }

    write!(&mut output, "\nTotal plans: {}", plans.len()).unwrap();
    Ok(output)
}

/// Format the static transaction fee table for human-readable output
///
/// # Errors
///
/// Returns an error if a configured amount cannot be converted for display
pub fn format_fee_configs_human() -> Result<String> {
    use std::fmt::Write;

    let mut output = String::from("Transaction fee configuration\n\n");
    writeln!(
        &mut output,
        "{:<12} {:<8} {:<10} {:<10} {}",
        "Method", "Rate", "Cap", "Fixed", "Platform"
    )
    .unwrap();
    output.push_str(&"-".repeat(52));
    output.push('\n');

    for config in &FEE_CONFIGS {
        let cap = match config.fee_cap {
            Some(cap) => display_amount(cap)?,
            None => "-".to_string(),
        };
        let fixed = match config.base_fee {
            Some(fee) => display_amount(fee)?,
            None => "-".to_string(),
        };
        let platform = if config.platform_fee_bps == 0 {
            "-".to_string()
        } else {
            smartflo_pricing::format_rate_bps(config.platform_fee_bps)
        };

        writeln!(
            &mut output,
            "{:<12} {:<8} {:<10} {:<10} {}",
            config.method.as_tag(),
            smartflo_pricing::format_rate_bps(config.fee_bps),
            cap,
            fixed,
            platform
        )
        .unwrap();
    }

    let supported: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_tag()).collect();
    write!(&mut output, "\nSupported methods: {}", supported.join(", ")).unwrap();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartflo_pricing::PRICING_PLANS;

    #[test]
    fn test_success_envelope_shape() {
        let output = success_envelope(serde_json::json!({"value": 1})).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["data"]["value"], 1);
    }

    #[test]
    fn test_plans_table_contains_every_plan() {
        let output = format_plans_human(&PRICING_PLANS).unwrap();
        for plan in &PRICING_PLANS {
            assert!(output.contains(plan.name), "missing plan {}", plan.name);
        }
        assert!(output.contains("Custom"));
        assert!(output.contains("Unlimited"));
        assert!(output.contains("Total plans: 4"));
    }

    #[test]
    fn test_fee_config_table_lists_all_methods() {
        let output = format_fee_configs_human().unwrap();
        for method in PaymentMethod::ALL {
            assert!(output.contains(method.as_tag()));
        }
        assert!(output.contains("2.9%"));
        assert!(output.contains("$100.00"));
    }
}
