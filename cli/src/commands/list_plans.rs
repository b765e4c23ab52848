//! List plans command implementation

use anyhow::Result;
use smartflo_pricing::PRICING_PLANS;
use tracing::info;

use super::OutputFormat;
use crate::utils::formatting::{format_plans_human, success_envelope};

/// Execute the list plans command
///
/// # Errors
/// Returns an error only if output serialization fails
pub fn execute(output_format: &OutputFormat) -> Result<String> {
    info!("Listing {} pricing plans", PRICING_PLANS.len());

    match output_format {
        OutputFormat::Human => format_plans_human(&PRICING_PLANS),
        OutputFormat::Json => success_envelope(serde_json::json!({
            "plans": PRICING_PLANS.as_slice(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_plans_output() {
        let output = execute(&OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["success"], true);
        let plans = parsed["data"]["plans"].as_array().unwrap();
        assert_eq!(plans.len(), 4);
        assert_eq!(plans[0]["id"], "free");
        assert!(plans[2]["contract_limit"].is_null());
    }
}
