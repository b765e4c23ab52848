//! Static subscription plan configuration
//!
//! Plans are process-wide static data defined once at compile time and
//! never mutated; any number of concurrent readers may use them without
//! coordination.

use serde::Serialize;

/// A subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingPlan {
    /// Stable plan identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Monthly price in minor currency units (cents); 0 for the free tier
    /// and for custom-priced enterprise plans
    pub price: u64,
    /// Discounted annual price in cents, where offered
    pub annual_price: Option<u64>,
    /// Contracts per month; `None` means unlimited
    pub contract_limit: Option<u32>,
    /// Display-only feature list, in presentation order
    pub features: &'static [&'static str],
}

/// Every subscription plan, in ascending price order
pub const PRICING_PLANS: [PricingPlan; 4] = [
    PricingPlan {
        id: "free",
        name: "Free",
        price: 0,
        annual_price: None,
        contract_limit: Some(2),
        features: &[
            "2 contracts per month",
            "Basic milestone tracking",
            "Email notifications",
            "Standard contract templates",
            "7-day payment protection",
            "Community support",
        ],
    },
    PricingPlan {
        id: "pro",
        name: "Pro",
        price: 2_900,
        annual_price: Some(29_000), // 2 months free
        contract_limit: Some(10),
        features: &[
            "10 contracts per month",
            "Full AI contract generation",
            "Advanced risk analysis",
            "Smart milestone suggestions",
            "Priority email support",
            "All payment methods (USDC, ACH, Cards)",
            "Auto payment release",
            "Advanced dispute resolution",
            "Client payment tracking",
            "Custom contract templates",
        ],
    },
    PricingPlan {
        id: "business",
        name: "Business",
        price: 7_900,
        annual_price: Some(79_000), // 2 months free
        contract_limit: None,
        features: &[
            "Unlimited contracts",
            "Everything in Pro",
            "Team collaboration tools",
            "Client management dashboard",
            "White-label contracts",
            "API access",
            "Advanced analytics",
            "Priority phone support",
            "Custom integrations",
            "Bulk contract creation",
            "Advanced reporting",
            "Volume discount rates",
        ],
    },
    PricingPlan {
        id: "enterprise",
        name: "Enterprise",
        price: 0, // custom pricing
        annual_price: None,
        contract_limit: None,
        features: &[
            "Everything in Business",
            "Custom contract limits",
            "Dedicated account manager",
            "Custom integrations",
            "SLA guarantees",
            "On-premise deployment options",
            "Custom training",
            "Negotiable transaction rates",
            "Priority feature requests",
            "Custom compliance support",
        ],
    },
];

/// Look up a plan by its identifier
#[must_use]
pub fn plan(id: &str) -> Option<&'static PricingPlan> {
    PRICING_PLANS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_lookup() {
        let pro = plan("pro").unwrap();
        assert_eq!(pro.name, "Pro");
        assert_eq!(pro.price, 2_900);
        assert_eq!(pro.annual_price, Some(29_000));
        assert_eq!(pro.contract_limit, Some(10));
    }

    #[test]
    fn test_unknown_plan_is_none() {
        assert!(plan("platinum").is_none());
    }

    #[test]
    fn test_contract_limits() {
        assert_eq!(plan("free").unwrap().contract_limit, Some(2));
        // Business and Enterprise are unlimited
        assert_eq!(plan("business").unwrap().contract_limit, None);
        assert_eq!(plan("enterprise").unwrap().contract_limit, None);
    }

    #[test]
    fn test_plan_ids_are_unique() {
        for (i, a) in PRICING_PLANS.iter().enumerate() {
            for b in &PRICING_PLANS[i.saturating_add(1)..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_unlimited_plans_serialize_limit_as_null() {
        let value = serde_json::to_value(plan("business").unwrap()).unwrap();
        assert!(value["contract_limit"].is_null());
        assert_eq!(value["id"], "business");
    }
}
