//! Staff domain types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::UnknownVariant;

/// Staff permission level within an office.
///
/// Wire/storage format: snake_case string (`owner`, `manager`, `employee`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Owner,
    Manager,
    Employee,
}

impl StaffRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    /// Employees cannot mutate office data directly; their writes become
    /// pending employee requests that an owner or manager approves.
    pub fn requires_approval(self) -> bool {
        matches!(self, Self::Employee)
    }
}

impl FromStr for StaffRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            other => Err(UnknownVariant {
                kind: "staff role",
                value: other.to_owned(),
            }),
        }
    }
}
