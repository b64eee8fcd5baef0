//! Office billing status.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Subscription state of an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    /// Trial period.
    Free,
    /// Paid before the trial ended.
    EarlyPayment,
    Active,
    PastDue,
    Canceled,
}

impl BillingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::EarlyPayment => "early_payment",
            Self::Active => "active",
            Self::PastDue => "past_due",
            Self::Canceled => "canceled",
        }
    }

    /// Whether staff of an office in this state may write office data.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Free | Self::EarlyPayment | Self::Active)
    }
}

impl FromStr for BillingStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Self::Free),
            "early_payment" => Ok(Self::EarlyPayment),
            "active" => Ok(Self::Active),
            "past_due" => Ok(Self::PastDue),
            "canceled" => Ok(Self::Canceled),
            other => Err(UnknownVariant {
                kind: "billing status",
                value: other.to_owned(),
            }),
        }
    }
}
