//! Closed status enumerations shared by the store and the API boundary.
//!
//! The store persists these as strings (with CHECK constraints); the API
//! parses incoming filter values into the enum before any SQL is built, so
//! free-form text never reaches a query.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raised when a string is not a member of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownValue(pub String);

macro_rules! status_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownValue(other.to_string())),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

status_enum!(TestStatus {
    Pending => "pending",
    Running => "running",
    Passed => "passed",
    Failed => "failed",
    Skipped => "skipped",
    Error => "error",
});

status_enum!(ApprovalStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
    Cancelled => "cancelled",
});

status_enum!(DeploymentStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Success => "success",
    Failed => "failed",
    RolledBack => "rolled_back",
});

status_enum!(Environment {
    Staging => "staging",
    Production => "production",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_status_round_trips() {
        for s in ["pending", "approved", "rejected", "cancelled"] {
            let parsed: ApprovalStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn test_status_round_trips() {
        for s in ["pending", "running", "passed", "failed", "skipped", "error"] {
            let parsed: TestStatus = s.parse().unwrap();
            assert_eq!(parsed.as_str(), s);
        }
    }

    #[test]
    fn deployment_status_uses_snake_case() {
        let parsed: DeploymentStatus = "in_progress".parse().unwrap();
        assert_eq!(parsed, DeploymentStatus::InProgress);
        let parsed: DeploymentStatus = "rolled_back".parse().unwrap();
        assert_eq!(parsed, DeploymentStatus::RolledBack);
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert!("deployed".parse::<ApprovalStatus>().is_err());
        assert!("".parse::<Environment>().is_err());
        assert!("Production".parse::<Environment>().is_err());
    }

    #[test]
    fn serde_matches_store_representation() {
        let json = serde_json::to_string(&DeploymentStatus::RolledBack).unwrap();
        assert_eq!(json, "\"rolled_back\"");
        let status: ApprovalStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(status, ApprovalStatus::Pending);
    }
}
