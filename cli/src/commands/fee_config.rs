//! Fee configuration echo command
//!
//! Pure config echo, no computation: the static fee table plus the list of
//! supported payment method tags, for client-side display.

use anyhow::Result;
use smartflo_pricing::{PaymentMethod, FEE_CONFIGS};
use tracing::info;

use super::OutputFormat;
use crate::utils::formatting::{format_fee_configs_human, success_envelope};

/// Execute the fee-config command
///
/// # Errors
/// Returns an error only if output serialization fails
pub fn execute(output_format: &OutputFormat) -> Result<String> {
    info!("Listing transaction fee configuration");

    match output_format {
        OutputFormat::Human => format_fee_configs_human(),
        OutputFormat::Json => {
            let supported: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.as_tag()).collect();
            success_envelope(serde_json::json!({
                "fee_configs": FEE_CONFIGS,
                "supported_methods": supported,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_config_echo() {
        let output = execute(&OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["success"], true);
        let data = &parsed["data"];
        assert_eq!(data["fee_configs"].as_array().unwrap().len(), 3);
        assert_eq!(
            data["supported_methods"],
            serde_json::json!(["usdc", "stripe_ach", "stripe_card"])
        );
    }
}
