//! Supported payment methods

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Payment method used to fund a milestone.
///
/// The set of supported wire tags is closed: `usdc`, `stripe_ach` and
/// `stripe_card`. Parsing anything else fails with
/// [`PricingError::UnsupportedPaymentMethod`] rather than falling back to a
/// default method or a zero fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// USDC transfer settled via the escrow flow
    Usdc,
    /// ACH bank transfer processed by Stripe
    StripeAch,
    /// Credit or debit card processed by Stripe
    StripeCard,
}

impl PaymentMethod {
    /// Every supported payment method, in display order
    pub const ALL: [Self; 3] = [Self::Usdc, Self::StripeAch, Self::StripeCard];

    /// Wire tag used in API payloads and CLI arguments
    #[must_use]
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::Usdc => "usdc",
            Self::StripeAch => "stripe_ach",
            Self::StripeCard => "stripe_card",
        }
    }

    /// Human-readable payment method name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Usdc => "USDC (Crypto)",
            Self::StripeAch => "ACH (Bank Transfer)",
            Self::StripeCard => "Credit/Debit Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for PaymentMethod {
    type Err = PricingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "usdc" => Ok(Self::Usdc),
            "stripe_ach" => Ok(Self::StripeAch),
            "stripe_card" => Ok(Self::StripeCard),
            other => Err(PricingError::UnsupportedPaymentMethod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_supported_tags() {
        assert_eq!("usdc".parse::<PaymentMethod>().unwrap(), PaymentMethod::Usdc);
        assert_eq!(
            "stripe_ach".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::StripeAch
        );
        assert_eq!(
            "stripe_card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::StripeCard
        );
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "paypal".parse::<PaymentMethod>().unwrap_err();
        assert_eq!(
            err,
            PricingError::UnsupportedPaymentMethod("paypal".to_string())
        );
        assert!(err.to_string().contains("paypal"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // Wire tags are exact; "USDC" is not a valid tag
        assert!("USDC".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_tag() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.to_string().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let json = serde_json::to_string(&PaymentMethod::StripeAch).unwrap();
        assert_eq!(json, "\"stripe_ach\"");
        let method: PaymentMethod = serde_json::from_str("\"stripe_card\"").unwrap();
        assert_eq!(method, PaymentMethod::StripeCard);
    }
}
