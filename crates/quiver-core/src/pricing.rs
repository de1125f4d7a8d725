//! Monthly/yearly pricing toggle.

use serde::{Deserialize, Serialize};

use crate::{config::PricingConfig, format};

/// Billing period selected on the pricing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    pub const ALL: [BillingPeriod; 2] = [BillingPeriod::Monthly, BillingPeriod::Yearly];

    /// Toggle button label.
    pub fn label(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "Monthly",
            BillingPeriod::Yearly => "Yearly",
        }
    }

    /// Suffix shown after the price.
    pub fn suffix(self) -> &'static str {
        match self {
            BillingPeriod::Monthly => "/month",
            BillingPeriod::Yearly => "/year",
        }
    }

    /// Parse a toggle button label, ignoring surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label.trim())
    }
}

/// Price text for the featured plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedPrice {
    pub price: String,
    pub period: &'static str,
}

/// Price of the featured plan for `period`.
pub fn featured_price(config: &PricingConfig, period: BillingPeriod) -> FeaturedPrice {
    let cents = match period {
        BillingPeriod::Monthly => config.monthly_cents,
        BillingPeriod::Yearly => config.yearly_cents,
    };
    FeaturedPrice {
        price: format::cents(cents),
        period: period.suffix(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_price() {
        let config = PricingConfig::default();
        assert_eq!(
            featured_price(&config, BillingPeriod::Monthly),
            FeaturedPrice {
                price: "$25.00".to_string(),
                period: "/month"
            }
        );
        assert_eq!(
            featured_price(&config, BillingPeriod::Yearly),
            FeaturedPrice {
                price: "$250.00".to_string(),
                period: "/year"
            }
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(BillingPeriod::from_label(" Yearly "), Some(BillingPeriod::Yearly));
        assert_eq!(BillingPeriod::from_label("Monthly"), Some(BillingPeriod::Monthly));
        assert_eq!(BillingPeriod::from_label("Weekly"), None);
    }

    #[test]
    fn test_default_is_monthly() {
        assert_eq!(BillingPeriod::default(), BillingPeriod::Monthly);
    }
}
