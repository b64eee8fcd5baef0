//! Employee approval request vocabulary.
//!
//! An employee's write is stored as a request naming the resource and action;
//! a separate approval workflow later applies or rejects it.

use serde::{Deserialize, Serialize};

/// Resource an employee request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    WelfareRecipient,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WelfareRecipient => "welfare_recipient",
        }
    }
}

/// Action an employee request asks to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Create,
    Update,
    Delete,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Lifecycle of an employee request. New requests are always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}
